pub mod shared {
    pub mod core {
        pub mod errors;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod connect;
        pub mod graphql;
    }
}

pub mod modules {
    pub mod todos {
        pub mod core {
            pub mod ports;
            pub mod todo;
        }
        pub mod use_cases {
            pub mod create_todo {
                pub mod command;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_todos {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_todo {
                pub mod command;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_todo {
                pub mod command;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod todo_store_in_memory;
            }
        }
    }

    pub mod events {
        pub mod core {
            pub mod event;
            pub mod ports;
            pub mod registration;
        }
        pub mod use_cases {
            pub mod create_event {
                pub mod command;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_events {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod register_for_event {
                pub mod command;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_event_registrations {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod event_store_in_memory;
            }
        }
    }
}

pub mod shell;
