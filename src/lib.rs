pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod availability;
    }
}

pub mod modules {
    pub mod work_statistics {
        pub mod core {
            pub mod aggregate;
            pub mod classify;
            pub mod policy;
            pub mod ports;
            pub mod range;
            pub mod scan_event;
            pub mod session;
            pub mod statistics;
            pub mod task;
            pub mod workday;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod get_employee_statistics {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod query;
            }
            pub mod get_team_statistics {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
                pub mod query;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod in_memory_directory;
                pub mod in_memory_scan_events;
                pub mod in_memory_tasks;
            }
        }
    }
}

pub mod shell;
