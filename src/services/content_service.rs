use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{
            module::ModulePatch, submodule::SubmodulePatch, video::VideoPatch, Module, Submodule,
            Video,
        },
        dto::request::{
            CreateModuleRequest, CreateSubmoduleRequest, UpdateModuleRequest,
            UpdateSubmoduleRequest, VideoRequest,
        },
    },
    repositories::{ModuleRepository, SubmoduleRepository, VideoRepository},
    services::db_helpers::{order_by_ids, parse_object_id},
};

pub const MODULE_NOT_FOUND_MESSAGE: &str = "Módulo no encontrado.";
pub const SUBMODULE_NOT_FOUND_MESSAGE: &str = "Tema no encontrado.";
pub const VIDEO_NOT_FOUND_MESSAGE: &str = "Video no encontrado.";

fn module_not_found() -> AppError {
    AppError::NotFound(MODULE_NOT_FOUND_MESSAGE.to_string())
}

fn submodule_not_found() -> AppError {
    AppError::NotFound(SUBMODULE_NOT_FOUND_MESSAGE.to_string())
}

fn video_not_found() -> AppError {
    AppError::NotFound(VIDEO_NOT_FOUND_MESSAGE.to_string())
}

/// Course hierarchy: modules own submodules, submodules own videos.
/// Parents hold ordered id lists of their children.
pub struct ContentService {
    modules: Arc<dyn ModuleRepository>,
    submodules: Arc<dyn SubmoduleRepository>,
    videos: Arc<dyn VideoRepository>,
}

impl ContentService {
    pub fn new(
        modules: Arc<dyn ModuleRepository>,
        submodules: Arc<dyn SubmoduleRepository>,
        videos: Arc<dyn VideoRepository>,
    ) -> Self {
        Self {
            modules,
            submodules,
            videos,
        }
    }

    // Modules

    pub async fn create_module(&self, request: CreateModuleRequest) -> AppResult<Module> {
        request.validate()?;
        let module = Module::new(request.nombre, request.descripcion, request.imagen);
        self.modules.create(module).await
    }

    pub async fn list_modules(&self) -> AppResult<Vec<Module>> {
        self.modules.find_all().await
    }

    pub async fn get_module(&self, id: &str) -> AppResult<Module> {
        let id = parse_object_id(id, MODULE_NOT_FOUND_MESSAGE)?;
        self.modules
            .find_by_id(&id)
            .await?
            .ok_or_else(module_not_found)
    }

    pub async fn update_module(&self, id: &str, request: UpdateModuleRequest) -> AppResult<Module> {
        let id = parse_object_id(id, MODULE_NOT_FOUND_MESSAGE)?;
        request.validate()?;
        self.modules
            .update(&id, ModulePatch::from(request))
            .await?
            .ok_or_else(module_not_found)
    }

    /// Children are left in place.
    pub async fn delete_module(&self, id: &str) -> AppResult<()> {
        let id = parse_object_id(id, MODULE_NOT_FOUND_MESSAGE)?;
        if !self.modules.delete(&id).await? {
            return Err(module_not_found());
        }
        Ok(())
    }

    // Submodules

    pub async fn create_submodule(
        &self,
        module_id: &str,
        request: CreateSubmoduleRequest,
    ) -> AppResult<Submodule> {
        let module_id = parse_object_id(module_id, MODULE_NOT_FOUND_MESSAGE)?;
        request.validate()?;

        if self.modules.find_by_id(&module_id).await?.is_none() {
            return Err(module_not_found());
        }

        let submodule = self
            .submodules
            .create(Submodule::new(request.nombre, request.descripcion))
            .await?;

        if !self.modules.push_submodule(&module_id, &submodule.id).await? {
            // parent vanished between the check and the link
            self.submodules.delete(&submodule.id).await?;
            return Err(module_not_found());
        }

        Ok(submodule)
    }

    pub async fn list_submodules(&self, module_id: &str) -> AppResult<Vec<Submodule>> {
        let module = self.get_module(module_id).await?;
        let submodules = self.submodules.find_by_ids(&module.submodulos).await?;
        Ok(order_by_ids(&module.submodulos, submodules, |s| s.id))
    }

    pub async fn get_submodule(&self, id: &str) -> AppResult<Submodule> {
        let id = parse_object_id(id, SUBMODULE_NOT_FOUND_MESSAGE)?;
        self.submodules
            .find_by_id(&id)
            .await?
            .ok_or_else(submodule_not_found)
    }

    pub async fn update_submodule(
        &self,
        id: &str,
        request: UpdateSubmoduleRequest,
    ) -> AppResult<Submodule> {
        let id = parse_object_id(id, SUBMODULE_NOT_FOUND_MESSAGE)?;
        request.validate()?;
        self.submodules
            .update(&id, SubmodulePatch::from(request))
            .await?
            .ok_or_else(submodule_not_found)
    }

    pub async fn delete_submodule(&self, id: &str) -> AppResult<()> {
        let id = parse_object_id(id, SUBMODULE_NOT_FOUND_MESSAGE)?;
        if !self.submodules.delete(&id).await? {
            return Err(submodule_not_found());
        }
        Ok(())
    }

    // Videos

    pub async fn create_video(&self, submodule_id: &str, request: VideoRequest) -> AppResult<Video> {
        let submodule_id = parse_object_id(submodule_id, SUBMODULE_NOT_FOUND_MESSAGE)?;
        request.validate()?;

        if self.submodules.find_by_id(&submodule_id).await?.is_none() {
            return Err(submodule_not_found());
        }

        let video = self
            .videos
            .create(Video::new(request.title, request.description, request.url))
            .await?;

        if !self.submodules.push_video(&submodule_id, &video.id).await? {
            self.videos.delete(&video.id).await?;
            return Err(submodule_not_found());
        }

        Ok(video)
    }

    pub async fn list_videos(&self, submodule_id: &str) -> AppResult<Vec<Video>> {
        let submodule = self.get_submodule(submodule_id).await?;
        let videos = self.videos.find_by_ids(&submodule.videos).await?;
        Ok(order_by_ids(&submodule.videos, videos, |v| v.id))
    }

    pub async fn get_video(&self, id: &str) -> AppResult<Video> {
        let id = parse_object_id(id, VIDEO_NOT_FOUND_MESSAGE)?;
        self.videos
            .find_by_id(&id)
            .await?
            .ok_or_else(video_not_found)
    }

    pub async fn update_video(&self, id: &str, request: VideoRequest) -> AppResult<Video> {
        let id = parse_object_id(id, VIDEO_NOT_FOUND_MESSAGE)?;
        request.validate()?;
        self.videos
            .update(&id, VideoPatch::from(request))
            .await?
            .ok_or_else(video_not_found)
    }

    pub async fn delete_video(&self, id: &str) -> AppResult<()> {
        let id = parse_object_id(id, VIDEO_NOT_FOUND_MESSAGE)?;
        if !self.videos.delete(&id).await? {
            return Err(video_not_found());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{
        MockModuleRepository, MockSubmoduleRepository, MockVideoRepository,
    };
    use mongodb::bson::oid::ObjectId;

    fn service(
        modules: MockModuleRepository,
        submodules: MockSubmoduleRepository,
        videos: MockVideoRepository,
    ) -> ContentService {
        ContentService::new(Arc::new(modules), Arc::new(submodules), Arc::new(videos))
    }

    fn submodule_request() -> CreateSubmoduleRequest {
        CreateSubmoduleRequest {
            nombre: "Fracciones".to_string(),
            descripcion: "Suma y resta".to_string(),
        }
    }

    #[tokio::test]
    async fn submodule_under_missing_module_is_never_stored() {
        let mut modules = MockModuleRepository::new();
        modules.expect_find_by_id().returning(|_| Ok(None));
        let mut submodules = MockSubmoduleRepository::new();
        submodules.expect_create().never();

        let result = service(modules, submodules, MockVideoRepository::new())
            .create_submodule(&ObjectId::new().to_hex(), submodule_request())
            .await;

        assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == MODULE_NOT_FOUND_MESSAGE));
    }

    #[tokio::test]
    async fn submodule_is_linked_to_parent() {
        let parent = Module::new("Mate".into(), "Basica".into(), "img.png".into());
        let parent_id = parent.id;

        let mut modules = MockModuleRepository::new();
        modules
            .expect_find_by_id()
            .returning(move |_| Ok(Some(parent.clone())));
        modules
            .expect_push_submodule()
            .withf(move |id, _| *id == parent_id)
            .times(1)
            .returning(|_, _| Ok(true));
        let mut submodules = MockSubmoduleRepository::new();
        submodules.expect_create().returning(Ok);

        let created = service(modules, submodules, MockVideoRepository::new())
            .create_submodule(&parent_id.to_hex(), submodule_request())
            .await
            .unwrap();

        assert_eq!(created.nombre, "Fracciones");
    }

    #[tokio::test]
    async fn failed_link_removes_orphan_submodule() {
        let parent = Module::new("Mate".into(), "Basica".into(), "img.png".into());
        let parent_id = parent.id;

        let mut modules = MockModuleRepository::new();
        modules
            .expect_find_by_id()
            .returning(move |_| Ok(Some(parent.clone())));
        modules.expect_push_submodule().returning(|_, _| Ok(false));
        let mut submodules = MockSubmoduleRepository::new();
        submodules.expect_create().returning(Ok);
        submodules.expect_delete().times(1).returning(|_| Ok(true));

        let result = service(modules, submodules, MockVideoRepository::new())
            .create_submodule(&parent_id.to_hex(), submodule_request())
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn videos_are_listed_in_reference_order() {
        let first = Video::new(Some("uno".into()), None, None);
        let second = Video::new(Some("dos".into()), None, None);
        let mut parent = Submodule::new("Tema".into(), "Desc".into());
        parent.videos = vec![second.id, first.id];
        let parent_id = parent.id;

        let mut submodules = MockSubmoduleRepository::new();
        submodules
            .expect_find_by_id()
            .returning(move |_| Ok(Some(parent.clone())));
        let mut videos = MockVideoRepository::new();
        videos
            .expect_find_by_ids()
            .returning(move |_| Ok(vec![first.clone(), second.clone()]));

        let listed = service(MockModuleRepository::new(), submodules, videos)
            .list_videos(&parent_id.to_hex())
            .await
            .unwrap();

        let titles: Vec<_> = listed.iter().filter_map(|v| v.title.as_deref()).collect();
        assert_eq!(titles, vec!["dos", "uno"]);
    }

    #[tokio::test]
    async fn video_under_missing_submodule_is_rejected() {
        let mut submodules = MockSubmoduleRepository::new();
        submodules.expect_find_by_id().returning(|_| Ok(None));
        let mut videos = MockVideoRepository::new();
        videos.expect_create().never();

        let request = VideoRequest {
            title: Some("Intro".into()),
            description: None,
            url: Some("https://videos.example.com/intro".into()),
        };
        let result = service(MockModuleRepository::new(), submodules, videos)
            .create_video(&ObjectId::new().to_hex(), request)
            .await;

        assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == SUBMODULE_NOT_FOUND_MESSAGE));
    }

    #[tokio::test]
    async fn delete_missing_module_is_not_found() {
        let mut modules = MockModuleRepository::new();
        modules.expect_delete().returning(|_| Ok(false));

        let result = service(modules, MockSubmoduleRepository::new(), MockVideoRepository::new())
            .delete_module(&ObjectId::new().to_hex())
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
