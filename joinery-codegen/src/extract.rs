//! Field model extraction from a type's member list.

use indexmap::IndexMap;
use joinery_ir::{Member, MemberKind};

use crate::GenerateError;

/// Reduce a type's member list to its field model.
///
/// Keeps data members only, in declaration order, mapping each field name
/// to its printable type. Methods and other members are skipped. A field
/// without a printable type fails the whole request, as does a field name
/// declared twice; field names are unique per type and a duplicate is a
/// caller error, not a last-write-wins.
pub fn extract_fields(members: &[Member]) -> Result<IndexMap<String, String>, GenerateError> {
    let mut fields = IndexMap::new();
    for member in members {
        if member.kind != MemberKind::Field {
            continue;
        }
        let ty = match member.type_descriptor.as_deref() {
            Some(ty) if !ty.is_empty() => ty.to_string(),
            _ => {
                return Err(GenerateError::MissingType {
                    member: member.name.clone(),
                });
            }
        };
        if fields.insert(member.name.clone(), ty).is_some() {
            return Err(GenerateError::DuplicateField {
                name: member.name.clone(),
            });
        }
    }
    Ok(fields)
}
