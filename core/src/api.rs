//! The closed set of OpenAI API operations and the paths they resolve to.
//!
//! # Design
//! `OpenAiApi` is a two-level sum type: a top-level category and, where the
//! category has more than one operation, a nested category enum. Resource
//! identifiers ride along as `String` fields and are interpolated into the
//! path verbatim. Nothing here escapes or validates them.
//!
//! `path` is an exhaustive `match` without a wildcard arm, so a new variant
//! does not compile until it has a path.

use crate::endpoint::Endpoint;

/// A logical operation against the OpenAI REST API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OpenAiApi {
    Audio(AudioCategory),
    Chat,
    Embeddings,
    FineTuning(FineTuningCategory),
    File(FileCategory),
    Images(ImageCategory),
    Model(ModelCategory),
    Moderations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCategory {
    Transcriptions,
    Translations,
}

impl AudioCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            AudioCategory::Transcriptions => "transcriptions",
            AudioCategory::Translations => "translations",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FineTuningCategory {
    Create,
    List,
    Retrieve { job_id: String },
    Cancel { job_id: String },
    Events { job_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FileCategory {
    List,
    Upload,
    Delete { file_id: String },
    Retrieve { file_id: String },
    RetrieveContent { file_id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageCategory {
    Generations,
    Edits,
    Variations,
}

impl ImageCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageCategory::Generations => "generations",
            ImageCategory::Edits => "edits",
            ImageCategory::Variations => "variations",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModelCategory {
    List,
    Retrieve { model_id: String },
    DeleteFineTuneModel { model_id: String },
}

impl OpenAiApi {
    /// Origin every operation is resolved against.
    pub const BASE: &'static str = "https://api.openai.com";
}

impl Endpoint for OpenAiApi {
    fn base(&self) -> &str {
        Self::BASE
    }

    fn path(&self) -> String {
        match self {
            OpenAiApi::Audio(category) => format!("/v1/audio/{}", category.as_str()),
            OpenAiApi::Chat => "/v1/chat/completions".to_string(),
            OpenAiApi::Embeddings => "/v1/embeddings".to_string(),
            // Fine-tuning paths carry no leading slash.
            OpenAiApi::FineTuning(category) => match category {
                FineTuningCategory::Create | FineTuningCategory::List => {
                    "v1/fine_tuning/jobs".to_string()
                }
                FineTuningCategory::Retrieve { job_id } => format!("v1/fine_tuning/jobs/{job_id}"),
                FineTuningCategory::Cancel { job_id } => {
                    format!("v1/fine_tuning/jobs/{job_id}/cancel")
                }
                FineTuningCategory::Events { job_id } => {
                    format!("v1/fine_tuning/jobs/{job_id}/events")
                }
            },
            OpenAiApi::File(category) => match category {
                FileCategory::List | FileCategory::Upload => "/v1/files".to_string(),
                FileCategory::Delete { file_id } | FileCategory::Retrieve { file_id } => {
                    format!("/v1/files/{file_id}")
                }
                FileCategory::RetrieveContent { file_id } => format!("/v1/files/{file_id}/content"),
            },
            OpenAiApi::Images(category) => format!("/v1/images/{}", category.as_str()),
            OpenAiApi::Model(category) => match category {
                ModelCategory::List => "/v1/models".to_string(),
                ModelCategory::Retrieve { model_id }
                | ModelCategory::DeleteFineTuneModel { model_id } => {
                    format!("/v1/models/{model_id}")
                }
            },
            OpenAiApi::Moderations => "/v1/moderations".to_string(),
        }
    }
}
