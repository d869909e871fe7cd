use crate::ie::qer_id::QerId;
use crate::ie::{Ie, IeType};
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveQer {
    pub qer_id: QerId,
}

impl RemoveQer {
    pub fn new(qer_id: QerId) -> Self {
        RemoveQer { qer_id }
    }

    pub fn marshal(&self) -> Vec<u8> {
        self.qer_id.marshal().to_vec()
    }

    pub fn to_ie(self) -> Ie {
        Ie::new(IeType::RemoveQer, self.marshal())
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, io::Error> {
        Ok(RemoveQer {
            qer_id: QerId::unmarshal(data)?,
        })
    }
}
