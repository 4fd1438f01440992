use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Video {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Video {
    pub fn new(title: Option<String>, description: Option<String>, url: Option<String>) -> Self {
        Video {
            id: ObjectId::new(),
            title,
            description,
            url,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VideoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

impl VideoPatch {
    pub fn apply(self, video: &mut Video) {
        if self.title.is_some() {
            video.title = self.title;
        }
        if self.description.is_some() {
            video.description = self.description;
        }
        if self.url.is_some() {
            video.url = self.url;
        }
    }
}
