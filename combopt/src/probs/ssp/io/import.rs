use crate::Result;
use crate::probs::ssp::entities::SSPInstance;
use crate::probs::ssp::io::ext_repr::ExtSSPInstance;

/// Imports an instance into the library
pub fn import(ext_instance: &ExtSSPInstance) -> Result<SSPInstance> {
    SSPInstance::new(ext_instance.pool.clone(), ext_instance.target)
}
