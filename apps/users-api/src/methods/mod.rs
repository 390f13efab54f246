pub mod change_status;
pub mod delete_client;
pub mod entities;
pub mod group_relations;
pub mod health_check;
pub mod list_clients;
pub mod list_members;
pub mod password_reset;
pub mod register_client;
pub mod routes;
pub mod tokens;
pub mod update_client;
pub mod update_client_secret;
pub mod view_client;
