//! Helpers shared by the integration test binaries.

#![allow(dead_code)]

use openai_endpoints::{
    AudioCategory, FileCategory, FineTuningCategory, HttpMethod, ImageCategory, ModelCategory,
    OpenAiApi,
};

pub const ROUTES: &str = include_str!("../../../test-vectors/routes.json");

/// Parse the method string from test vectors into `HttpMethod`.
pub fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

/// Build the operation a test vector names, e.g. `file.retrieve` with an id.
pub fn operation(name: &str, id: Option<&str>) -> OpenAiApi {
    let require_id = || id.unwrap_or_else(|| panic!("{name} needs an id")).to_string();
    match name {
        "audio.transcriptions" => OpenAiApi::Audio(AudioCategory::Transcriptions),
        "audio.translations" => OpenAiApi::Audio(AudioCategory::Translations),
        "chat" => OpenAiApi::Chat,
        "embeddings" => OpenAiApi::Embeddings,
        "fine_tuning.create" => OpenAiApi::FineTuning(FineTuningCategory::Create),
        "fine_tuning.list" => OpenAiApi::FineTuning(FineTuningCategory::List),
        "fine_tuning.retrieve" => OpenAiApi::FineTuning(FineTuningCategory::Retrieve { job_id: require_id() }),
        "fine_tuning.cancel" => OpenAiApi::FineTuning(FineTuningCategory::Cancel { job_id: require_id() }),
        "fine_tuning.events" => OpenAiApi::FineTuning(FineTuningCategory::Events { job_id: require_id() }),
        "file.list" => OpenAiApi::File(FileCategory::List),
        "file.upload" => OpenAiApi::File(FileCategory::Upload),
        "file.delete" => OpenAiApi::File(FileCategory::Delete { file_id: require_id() }),
        "file.retrieve" => OpenAiApi::File(FileCategory::Retrieve { file_id: require_id() }),
        "file.retrieve_content" => OpenAiApi::File(FileCategory::RetrieveContent { file_id: require_id() }),
        "images.generations" => OpenAiApi::Images(ImageCategory::Generations),
        "images.edits" => OpenAiApi::Images(ImageCategory::Edits),
        "images.variations" => OpenAiApi::Images(ImageCategory::Variations),
        "model.list" => OpenAiApi::Model(ModelCategory::List),
        "model.retrieve" => OpenAiApi::Model(ModelCategory::Retrieve { model_id: require_id() }),
        "model.delete_fine_tune" => {
            OpenAiApi::Model(ModelCategory::DeleteFineTuneModel { model_id: require_id() })
        }
        "moderations" => OpenAiApi::Moderations,
        other => panic!("unknown operation: {other}"),
    }
}

/// Every case in `routes.json` as `(name, operation, method, path, url)`.
pub fn route_cases() -> Vec<(String, OpenAiApi, HttpMethod, String, String)> {
    let vectors: serde_json::Value = serde_json::from_str(ROUTES).unwrap();
    vectors["cases"]
        .as_array()
        .unwrap()
        .iter()
        .map(|case| {
            let name = case["name"].as_str().unwrap().to_string();
            let op = operation(case["operation"].as_str().unwrap(), case["id"].as_str());
            let method = parse_method(case["method"].as_str().unwrap());
            let path = case["path"].as_str().unwrap().to_string();
            let url = case["url"].as_str().unwrap().to_string();
            (name, op, method, path, url)
        })
        .collect()
}
