pub mod cluster_server;
