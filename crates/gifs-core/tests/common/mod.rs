pub mod import_server;
