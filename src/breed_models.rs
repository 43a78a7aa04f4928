//! 3D model lookup for breeds
//!
//! Static mapping from breed name to a `.glb` file under the models
//! directory, with a generic fallback model for everything else.

use std::path::Path;

/// Breeds with a dedicated model file (lowercased name, file under `dog/`)
const BREED_MODELS: &[(&str, &str)] = &[
    ("labrador", "labrador.glb"),
    ("german shepherd", "german_shepherd.glb"),
    ("golden retriever", "golden_retriever.glb"),
    ("akita", "akita.glb"),
];

/// Fallback model served when a breed has no dedicated file
const DEFAULT_MODEL: &str = "model.glb";

/// Resolve the model path for a breed, relative to the models directory.
///
/// Matching is case-insensitive. The dedicated file must actually exist on
/// disk, otherwise the default model is returned.
pub fn model_for(models_dir: &Path, breed_name: &str) -> String {
    let name = breed_name.to_lowercase();

    if let Some((_, file)) = BREED_MODELS.iter().find(|(breed, _)| *breed == name) {
        let relative = format!("dog/{}", file);
        if models_dir.join(&relative).exists() {
            log::info!("Found model for {}: {}", name, relative);
            return relative;
        }
    }

    log::info!("No model found for {}, using default model", name);
    format!("dog/{}", DEFAULT_MODEL)
}
