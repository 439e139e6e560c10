//! Request body preparation: JSON templates with an injected random `id`.
mod id;


use rand::Rng;
use serde_json::{Map, Value};

use crate::error::TemplateError;

pub use id::{IdKind, IdSpec, IdValue, MAX_NUMBER_DIGITS};

/// Key set on the template object.
pub const ID_FIELD: &str = "id";

/// Decodes `raw` as a JSON object, sets its `id` field to a freshly generated
/// value and re-encodes it. Every other field is kept as is.
///
/// # Errors
///
/// Returns [`TemplateError::MalformedPayload`] when `raw` is not a JSON object
/// and [`TemplateError::EncodePayload`] when the object cannot be serialized.
pub fn prepare_payload<R>(raw: &[u8], id: &IdSpec, rng: &mut R) -> Result<Vec<u8>, TemplateError>
where
    R: Rng + ?Sized,
{
    let mut object: Map<String, Value> = serde_json::from_slice(raw)
        .map_err(|err| TemplateError::MalformedPayload { source: err })?;

    let value = id.generate(rng);
    tracing::debug!(
        "Injecting {} id of length {} into JSON body: {:?}",
        id.kind().as_str(),
        id.length(),
        value
    );
    object.insert(ID_FIELD.to_owned(), value.into());

    serde_json::to_vec(&object).map_err(|err| TemplateError::EncodePayload { source: err })
}
