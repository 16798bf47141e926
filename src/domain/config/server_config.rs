pub struct ServerConfig;

impl ServerConfig {
    pub const BIND_HOST: &'static str = "0.0.0.0";
    pub const PORT: u16 = 8000;
    pub const HISTORY_FILE_PATH: &'static str = "./log/history.json";

    // Response and history payload constants
    pub const STATUS_OK: &'static str = "ok";
    pub const REQUEST_CONTENT: &'static str = "Get Requested";
}
