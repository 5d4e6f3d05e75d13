// src/constants.rs

pub const UI_WIDTH: usize = 72;
pub const FILENAME_TRUNCATE_LENGTH: usize = 50;
pub const CONFIG_DIR_NAME: &str = concat!(".", clap::crate_name!());
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = concat!(clap::crate_name!(), ".log");
pub const LOG_FALLBACK_FILE_NAME: &str = "fallback.log";
pub const DEFAULT_SITES_FILE: &str = "sites.json";
pub const DEFAULT_CREDENTIALS_FILE: &str = "credentials/credentials.json";
pub const CREDENTIALS_ENV_VAR: &str = "COURSE_DL_CREDENTIALS";
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

pub mod reader {
    pub const HOST_MARKER: &str = "reader.uni-mainz.de";
    pub const ORIGIN: &str = "https://reader.uni-mainz.de";
    pub const LOGIN_URL: &str = "http://reader.uni-mainz.de";
    pub const SESSION_COOKIE: &str = "EdgeAccessCookie";
    pub const USERNAME_DOMAIN: &str = "UNI-MAINZ";
    pub const USERNAME_FIELD_ID: &str = "userNameInput";
    pub const PASSWORD_FIELD_ID: &str = "passwordInput";
    pub const SUBMIT_ID: &str = "submitButton";
    pub const LINK_SELECTOR: &str = "a.ms-listlink.ms-draggable";
}

pub mod moodle {
    pub const HOST_MARKER: &str = "moodle.uni-mainz.de";
    pub const ORIGIN: &str = "https://moodle.uni-mainz.de";
    pub const LOGIN_URL: &str = "https://moodle.uni-mainz.de/login/index.php";
    pub const SESSION_COOKIE: &str = "MoodleSession";
    pub const USERNAME_FIELD_ID: &str = "username";
    pub const PASSWORD_FIELD_ID: &str = "password";
    pub const SUBMIT_ID: &str = "loginbtn";
    pub const ITEM_SELECTOR: &str = "li.modtype_resource";
    pub const FILE_MARKER: &str = "_file";
    pub const FILE_EXTENSION: &str = ".pdf";
}
