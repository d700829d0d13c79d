pub mod service_logging;
