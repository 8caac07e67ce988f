use crate::Result;
use crate::probs::kp::entities::{KPInstance, KPItem};
use crate::probs::kp::io::ext_repr::ExtKPInstance;

/// Imports an instance into the library
pub fn import(ext_instance: &ExtKPInstance) -> Result<KPInstance> {
    let items = ext_instance
        .items
        .iter()
        .map(|i| KPItem::new(i.weight, i.value))
        .collect();
    let instance = KPInstance::new(items, ext_instance.capacity);
    instance.validate()?;
    Ok(instance)
}
