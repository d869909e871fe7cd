//! APN/DNN IE.

use crate::ie::{Ie, IeType};
use std::io;

/// Represents the APN/DNN (Access Point Name / Data Network Name) Information Element.
/// Used to identify the access point or data network in 4G/5G networks.
/// Defined in 3GPP TS 29.244 Section 8.2.103.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApnDnn {
    pub name: String,
}

impl ApnDnn {
    /// Creates a new APN/DNN IE.
    pub fn new(name: String) -> Self {
        ApnDnn { name }
    }

    /// Creates an APN/DNN from a string slice.
    pub fn from_str(name: &str) -> Self {
        ApnDnn::new(name.to_string())
    }

    /// Gets the APN/DNN name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the length of the marshaled APN/DNN.
    pub fn len(&self) -> usize {
        // APN/DNN encoding uses DNS label format with length prefixes
        self.encoded_name().len()
    }

    /// Checks if the APN/DNN is empty.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    /// Encodes the APN/DNN name in DNS label format.
    /// Each label is prefixed with its length (1 byte).
    /// Example: "internet.mnc001.mcc001.gprs" becomes:
    /// [8]internet[6]mnc001[6]mcc001[4]gprs[0]
    fn encoded_name(&self) -> Vec<u8> {
        if self.name.is_empty() {
            return vec![0]; // Empty name is encoded as single zero byte
        }

        let mut encoded = Vec::new();
        let labels: Vec<&str> = self.name.split('.').collect();

        for label in labels {
            if label.len() > 63 {
                // RFC 1035: Label length limit is 63 octets
                // In practice, we'll truncate to 63 for robustness
                let truncated = &label[..63];
                encoded.push(truncated.len() as u8);
                encoded.extend_from_slice(truncated.as_bytes());
            } else {
                encoded.push(label.len() as u8);
                encoded.extend_from_slice(label.as_bytes());
            }
        }

        // DNS names end with a zero-length label
        encoded.push(0);
        encoded
    }

    /// Decodes the APN/DNN name from DNS label format.
    fn decode_name(encoded: &[u8]) -> Result<String, io::Error> {
        if encoded.is_empty() {
            return Ok(String::new());
        }

        let mut labels = Vec::new();
        let mut offset = 0;

        while offset < encoded.len() {
            let label_len = encoded[offset] as usize;
            offset += 1;

            if label_len == 0 {
                // End of name
                break;
            }

            if offset + label_len > encoded.len() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "Invalid APN/DNN label length",
                ));
            }

            let label = String::from_utf8(encoded[offset..offset + label_len].to_vec())
                .map_err(|_| {
                    io::Error::new(io::ErrorKind::InvalidData, "Invalid APN/DNN label UTF-8")
                })?;

            labels.push(label);
            offset += label_len;
        }

        Ok(labels.join("."))
    }

    /// Marshals the APN/DNN into a byte vector.
    pub fn marshal(&self) -> Vec<u8> {
        self.encoded_name()
    }

    /// Unmarshals a byte slice into an APN/DNN IE.
    pub fn unmarshal(payload: &[u8]) -> Result<Self, io::Error> {
        let name = Self::decode_name(payload)?;
        Ok(ApnDnn { name })
    }

    /// Wraps the APN/DNN in an APN/DNN IE.
    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::ApnDnn, self.marshal())
    }
}
