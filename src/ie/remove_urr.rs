use crate::ie::{Ie, IeType, UrrId};
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveUrr {
    pub urr_id: UrrId,
}

impl RemoveUrr {
    pub fn new(urr_id: UrrId) -> Self {
        RemoveUrr { urr_id }
    }

    pub fn marshal(&self) -> Vec<u8> {
        self.urr_id.marshal().to_vec()
    }

    pub fn to_ie(self) -> Ie {
        Ie::new(IeType::RemoveUrr, self.marshal())
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, io::Error> {
        Ok(RemoveUrr {
            urr_id: UrrId::unmarshal(data)?,
        })
    }
}
