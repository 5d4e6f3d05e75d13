// src/models/portal.rs

use crate::constants::{moodle, reader};
use std::fmt;

/// The two portals the tool knows how to log into.
///
/// Variant order is processing order: Moodle sites run before Reader sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Portal {
    Moodle,
    Reader,
}

/// Element ids of a portal's login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginForm {
    pub username_id: &'static str,
    pub password_id: &'static str,
    pub submit_id: &'static str,
}

impl Portal {
    pub const ALL: [Portal; 2] = [Portal::Moodle, Portal::Reader];

    /// Classifies a site URL by host substring. `None` for anything else.
    pub fn detect(url: &str) -> Option<Self> {
        if url.contains(moodle::HOST_MARKER) {
            Some(Portal::Moodle)
        } else if url.contains(reader::HOST_MARKER) {
            Some(Portal::Reader)
        } else {
            None
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Portal::Moodle => "Moodle",
            Portal::Reader => "Reader",
        }
    }

    pub fn login_url(self) -> &'static str {
        match self {
            Portal::Moodle => moodle::LOGIN_URL,
            Portal::Reader => reader::LOGIN_URL,
        }
    }

    /// Origin that relative document links are resolved against.
    pub fn origin(self) -> &'static str {
        match self {
            Portal::Moodle => moodle::ORIGIN,
            Portal::Reader => reader::ORIGIN,
        }
    }

    pub fn session_cookie(self) -> &'static str {
        match self {
            Portal::Moodle => moodle::SESSION_COOKIE,
            Portal::Reader => reader::SESSION_COOKIE,
        }
    }

    pub fn login_form(self) -> LoginForm {
        match self {
            Portal::Moodle => LoginForm {
                username_id: moodle::USERNAME_FIELD_ID,
                password_id: moodle::PASSWORD_FIELD_ID,
                submit_id: moodle::SUBMIT_ID,
            },
            Portal::Reader => LoginForm {
                username_id: reader::USERNAME_FIELD_ID,
                password_id: reader::PASSWORD_FIELD_ID,
                submit_id: reader::SUBMIT_ID,
            },
        }
    }

    /// Reader's ADFS form wants `DOMAIN\user`, Moodle takes the bare name.
    pub fn format_username(self, username: &str) -> String {
        match self {
            Portal::Moodle => username.to_string(),
            Portal::Reader => format!("{}\\{}", reader::USERNAME_DOMAIN, username),
        }
    }
}

impl fmt::Display for Portal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
