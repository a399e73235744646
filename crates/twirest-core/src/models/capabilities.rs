//! Phone number capability flags
//!
//! The API nests the flags under a `<Capabilities>` element. Records expose
//! them as flat fields; this nested shape is only used on the wire.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct CapabilitiesWire {
    #[serde(rename = "Voice")]
    pub voice: String,
    #[serde(rename = "SMS")]
    pub sms: String,
    #[serde(rename = "MMS")]
    pub mms: String,
    #[serde(rename = "Fax")]
    pub fax: String,
}

impl CapabilitiesWire {
    pub(crate) fn new(voice: &str, sms: &str, mms: &str, fax: &str) -> Self {
        Self {
            voice: voice.to_string(),
            sms: sms.to_string(),
            mms: mms.to_string(),
            fax: fax.to_string(),
        }
    }
}
