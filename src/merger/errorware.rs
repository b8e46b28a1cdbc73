//! Errorware: settings for the error-reporting middleware.
//!
//! Reporting options exist only when the deployment runs with `debug` off.
//! In debug mode the middleware shows errors in the browser instead of
//! mailing or logging them.

use crate::settings::convert::as_bool;
use crate::settings::GlobalConfig;
use serde::Serialize;
use tracing::{debug, warn};

pub const DEFAULT_SMTP_SERVER: &str = "localhost";
pub const DEFAULT_SUBJECT_PREFIX: &str = "WebApp Error: ";
pub const DEFAULT_FROM_ADDRESS: &str = "webapp@yourapp.com";
pub const DEFAULT_ERROR_MESSAGE: &str = "An internal server error occurred";

/// Error middleware configuration, forwarded verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Errorware {
    pub debug: bool,
    #[serde(flatten)]
    pub reporting: Option<ErrorReporting>,
}

/// Production-mode reporting options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReporting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_log: Option<String>,
    pub smtp_server: String,
    pub error_subject_prefix: String,
    pub from_address: String,
    pub error_message: String,
}

impl Errorware {
    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn reporting(&self) -> Option<&ErrorReporting> {
        self.reporting.as_ref()
    }
}

/// Read the `debug` flag leniently: absent or unrecognized values mean debug.
pub fn debug_enabled(global: &GlobalConfig) -> bool {
    match global.get("debug") {
        None => true,
        Some(raw) => as_bool(raw).unwrap_or_else(|| {
            warn!(value = raw, "Unrecognized debug value, assuming debug mode");
            true
        }),
    }
}

pub fn build_errorware(global: &GlobalConfig) -> Errorware {
    if debug_enabled(global) {
        debug!("Debug mode on; error reporting disabled");
        return Errorware {
            debug: true,
            reporting: None,
        };
    }

    let from_address = match global
        .get("from_address")
        .or_else(|| global.get("error_email_from"))
    {
        Some(address) => address.to_string(),
        None => {
            warn!(
                sender = DEFAULT_FROM_ADDRESS,
                "No from_address or error_email_from configured; using placeholder sender"
            );
            DEFAULT_FROM_ADDRESS.to_string()
        }
    };

    let reporting = ErrorReporting {
        error_email: global.get("email_to").map(str::to_string),
        error_log: global.get("error_log").map(str::to_string),
        smtp_server: global.get_or("smtp_server", DEFAULT_SMTP_SERVER).to_string(),
        error_subject_prefix: global
            .get_or("error_subject_prefix", DEFAULT_SUBJECT_PREFIX)
            .to_string(),
        from_address,
        error_message: global
            .get_or("error_message", DEFAULT_ERROR_MESSAGE)
            .to_string(),
    };

    if reporting.error_email.is_none() {
        warn!("Debug mode off but email_to is not set; errors will not be mailed");
    }

    Errorware {
        debug: false,
        reporting: Some(reporting),
    }
}
