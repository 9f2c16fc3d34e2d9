//! modify_attributes - inverted through a pre-image snapshot.
//!
//! The recorder reads the affected attributes before the change is
//! applied and computes the attribute-level inverse of every requested
//! modification from that snapshot. Rollback replays the inverse list.

use dirtx_core::{Attributes, DirectoryHandle, Modification, ModifyOp};
use dirtx_name::DistinguishedName;

use crate::error::{CompensatingError, CompensatingResult};
use crate::executor::OperationExecutor;
use crate::recorder::{OperationArgs, OperationRecorder};

/// Records an incoming `modify_attributes` call, capturing the pre-image
/// of every affected attribute via a lookup.
pub struct ModifyAttributesOperationRecorder {
    directory: DirectoryHandle,
}

impl ModifyAttributesOperationRecorder {
    pub fn new(directory: DirectoryHandle) -> Self {
        Self { directory }
    }
}

impl OperationRecorder for ModifyAttributesOperationRecorder {
    fn record(&self, args: OperationArgs) -> CompensatingResult<Box<dyn OperationExecutor>> {
        match args {
            OperationArgs::Modify { name, changes } => {
                let pre_image = self.directory.lookup(&name)?;
                let inverse = changes
                    .iter()
                    .filter_map(|change| invert(&pre_image, change))
                    .collect();
                Ok(Box::new(ModifyAttributesOperationExecutor {
                    directory: self.directory.clone(),
                    name,
                    requested: changes,
                    inverse,
                }))
            }
            _ => Err(CompensatingError::argument_mismatch("modify_attributes")),
        }
    }
}

/// Compute the inverse of one modification against the pre-image.
///
/// Returns `None` when the change has no observable effect to undo
/// (adding nothing, removing values that were never present).
fn invert(pre_image: &Attributes, change: &Modification) -> Option<Modification> {
    let existing = pre_image.get(change.id());
    match change.op() {
        ModifyOp::Add => {
            if change.values().is_empty() {
                None
            } else {
                Some(Modification::remove(change.id(), change.values().to_vec()))
            }
        }
        ModifyOp::Replace => match existing {
            Some(attr) => Some(Modification::replace(change.id(), attr.values().to_vec())),
            None => Some(Modification::remove_all(change.id())),
        },
        ModifyOp::Remove => {
            let attr = existing?;
            let removed: Vec<String> = if change.values().is_empty() {
                attr.values().to_vec()
            } else {
                change
                    .values()
                    .iter()
                    .filter(|value| attr.contains(value))
                    .cloned()
                    .collect()
            };
            if removed.is_empty() {
                None
            } else {
                Some(Modification::add(change.id(), removed))
            }
        }
    }
}

/// A recorded `modify_attributes` with its pre-computed inverse list.
pub struct ModifyAttributesOperationExecutor {
    directory: DirectoryHandle,
    name: DistinguishedName,
    requested: Vec<Modification>,
    inverse: Vec<Modification>,
}

impl ModifyAttributesOperationExecutor {
    pub fn name(&self) -> &DistinguishedName {
        &self.name
    }

    pub fn inverse(&self) -> &[Modification] {
        &self.inverse
    }
}

impl OperationExecutor for ModifyAttributesOperationExecutor {
    fn perform(&self) -> CompensatingResult<()> {
        self.directory
            .modify_attributes(&self.name, &self.requested)?;
        Ok(())
    }

    fn commit(&self) -> CompensatingResult<()> {
        Ok(())
    }

    fn rollback(&self) -> CompensatingResult<()> {
        if self.inverse.is_empty() {
            return Ok(());
        }
        self.directory.modify_attributes(&self.name, &self.inverse)?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("modify_attributes {}", self.name)
    }
}
