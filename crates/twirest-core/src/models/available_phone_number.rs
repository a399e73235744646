//! Available phone number search results

use serde::{Deserialize, Serialize};

use super::capabilities::CapabilitiesWire;
use crate::text;

/// Search result for numbers that can be purchased
///
/// Unlike the other lists this one carries no page metadata, only the
/// `uri` attribute, and accepts any child element name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "AvailablePhoneNumbers")]
pub struct AvailablePhoneNumbersResponse {
    #[serde(rename = "@uri", default)]
    pub uri: String,

    #[serde(
        rename(serialize = "AvailablePhoneNumber", deserialize = "$value"),
        default
    )]
    pub numbers: Vec<AvailablePhoneNumber>,
}

/// A number that can be purchased
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AvailablePhoneNumberWire", into = "AvailablePhoneNumberWire")]
pub struct AvailablePhoneNumber {
    pub friendly_name: String,
    pub phone_number: String,
    pub lata: String,
    pub rate_center: String,
    pub latitude: String,
    pub longitude: String,
    pub region: String,
    pub postal_code: String,
    pub iso_country: String,
    pub address_requirements: String,
    pub beta: String,

    /// From `Capabilities/Voice`
    pub voice: String,
    /// From `Capabilities/SMS`
    pub sms: String,
    /// From `Capabilities/MMS`
    pub mms: String,
    /// From `Capabilities/Fax`
    pub fax: String,
}

impl AvailablePhoneNumber {
    pub fn voice_enabled(&self) -> bool {
        text::parse_flag(&self.voice).unwrap_or(false)
    }

    pub fn sms_enabled(&self) -> bool {
        text::parse_flag(&self.sms).unwrap_or(false)
    }

    pub fn mms_enabled(&self) -> bool {
        text::parse_flag(&self.mms).unwrap_or(false)
    }

    pub fn fax_enabled(&self) -> bool {
        text::parse_flag(&self.fax).unwrap_or(false)
    }

    pub fn is_beta(&self) -> bool {
        text::parse_flag(&self.beta).unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename = "AvailablePhoneNumber", rename_all = "PascalCase", default)]
struct AvailablePhoneNumberWire {
    friendly_name: String,
    phone_number: String,
    lata: String,
    rate_center: String,
    latitude: String,
    longitude: String,
    region: String,
    postal_code: String,
    iso_country: String,
    address_requirements: String,
    beta: String,
    capabilities: CapabilitiesWire,
}

impl From<AvailablePhoneNumberWire> for AvailablePhoneNumber {
    fn from(wire: AvailablePhoneNumberWire) -> Self {
        let caps = wire.capabilities;
        Self {
            friendly_name: wire.friendly_name,
            phone_number: wire.phone_number,
            lata: wire.lata,
            rate_center: wire.rate_center,
            latitude: wire.latitude,
            longitude: wire.longitude,
            region: wire.region,
            postal_code: wire.postal_code,
            iso_country: wire.iso_country,
            address_requirements: wire.address_requirements,
            beta: wire.beta,
            voice: caps.voice,
            sms: caps.sms,
            mms: caps.mms,
            fax: caps.fax,
        }
    }
}

impl From<AvailablePhoneNumber> for AvailablePhoneNumberWire {
    fn from(number: AvailablePhoneNumber) -> Self {
        Self {
            capabilities: CapabilitiesWire::new(
                &number.voice,
                &number.sms,
                &number.mms,
                &number.fax,
            ),
            friendly_name: number.friendly_name,
            phone_number: number.phone_number,
            lata: number.lata,
            rate_center: number.rate_center,
            latitude: number.latitude,
            longitude: number.longitude,
            region: number.region,
            postal_code: number.postal_code,
            iso_country: number.iso_country,
            address_requirements: number.address_requirements,
            beta: number.beta,
        }
    }
}
