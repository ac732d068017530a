//! Convert-and-replace orchestration.
//!
//! The whole sequence is strictly sequential with abort-on-first-failure:
//! a run either completes or leaves the original module untouched. A failed
//! run can leave an orphaned remote asset behind; that is accepted and
//! logged for operator cleanup, remote assets are never deleted here.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use medialift_core::{ContextId, CourseId, ModuleEvent, ModuleKind, TextField, UserId};
use medialift_host::{
    AreaFile, Course, FileStore, ModuleInfo, ModuleStore, PluginConfig, VideoModuleSpec, is_video,
};
use medialift_media::{
    CATEGORY_LEAF, Category, CategoryPath, EntryDraft, MediaEntry, MediaService, MediaSession,
};

use crate::embed::{self, PLAYER_HEIGHT, PLAYER_WIDTH, PLUGINFILE_TOKEN};
use crate::error::ConvertError;
use crate::text;

/// How a convert-and-replace run ended without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// The replacement module exists with a verified entry id and the old
    /// module was deleted.
    Replaced,
    /// No video file in the content area; nothing to do.
    NoCandidate,
    /// The intro carries embedded file markers, so the module was left in
    /// place and handed to the text rewrite instead.
    DelegatedToText,
}

/// Fields copied from the old module onto its replacement.
#[derive(Debug, Clone)]
pub(crate) struct ModuleArgs {
    pub name: String,
    pub description: String,
    pub visible: bool,
    pub group_mode: u8,
    pub grouping_id: u64,
    pub availability: Option<String>,
    pub section: u32,
    pub id_number: String,
    pub intro: String,
    pub intro_format: u8,
}

/// Stitches the host seams and the remote client into conversion runs.
///
/// Holds no per-job state; a remote session is opened inside each run and
/// never reused across runs.
pub struct Converter {
    files: Arc<dyn FileStore>,
    modules: Arc<dyn ModuleStore>,
    media: Arc<dyn MediaService>,
    config: PluginConfig,
}

impl Converter {
    pub fn new(
        files: Arc<dyn FileStore>,
        modules: Arc<dyn ModuleStore>,
        media: Arc<dyn MediaService>,
        config: PluginConfig,
    ) -> Self {
        Self {
            files,
            modules,
            media,
            config,
        }
    }

    pub(crate) fn files(&self) -> &dyn FileStore {
        self.files.as_ref()
    }

    pub(crate) fn modules(&self) -> &dyn ModuleStore {
        self.modules.as_ref()
    }

    pub(crate) fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// Find the main video file of a module's content area.
    ///
    /// Deliberate last-wins scan: later files with a positive size and a
    /// video MIME type override earlier ones. The host listing has no
    /// defined order, so with several videos in one area the pick is
    /// effectively arbitrary, matching long-standing behavior.
    fn find_main_video(
        &self,
        context: ContextId,
        kind: &ModuleKind,
    ) -> Result<Option<Arc<dyn AreaFile>>, ConvertError> {
        let files = self.files.area_files(context, &kind.component(), "content")?;
        let mut main = None;
        for file in files {
            if file.size() > 0 && is_video(file.as_ref()) {
                main = Some(file);
            }
        }
        Ok(main)
    }

    fn package_args(
        &self,
        course: &Course,
        info: &ModuleInfo,
        name: &str,
    ) -> Result<ModuleArgs, ConvertError> {
        let data = self.modules.module_data(&info.kind, info.instance)?;
        Ok(ModuleArgs {
            name: name.to_string(),
            description: String::new(),
            visible: info.visible,
            group_mode: info.group_mode,
            grouping_id: course.default_grouping_id,
            availability: info.availability.clone(),
            section: info.section,
            id_number: info.id_number.clone(),
            intro: data.intro,
            intro_format: data.intro_format,
        })
    }

    /// Resolve the course's remote category, creating the course and leaf
    /// segments on demand. The base path is administrative and must already
    /// exist; it is never created here.
    fn resolve_category(
        &self,
        session: &dyn MediaSession,
        course: &Course,
        base: &str,
    ) -> Result<Category, ConvertError> {
        let segment = if self.config.use_short_name {
            course.short_name.clone()
        } else {
            course.id.to_string()
        };
        let path = CategoryPath::new(base, segment);

        let existing = session
            .list_categories(&path.full_name())
            .map_err(ConvertError::CategoryList)?;
        if let Some(category) = existing.into_iter().next() {
            return Ok(category);
        }

        let parents = session
            .list_categories(path.base())
            .map_err(ConvertError::CategoryList)?;
        let Some(parent) = parents.into_iter().next() else {
            return Err(ConvertError::BaseCategoryMissing(path.base().to_string()));
        };

        let course_category = session
            .add_category(parent.id, path.course_segment())
            .map_err(ConvertError::CourseCategoryCreate)?;
        session
            .add_category(course_category.id, CATEGORY_LEAF)
            .map_err(ConvertError::LeafCategoryCreate)
    }

    /// Upload one video file and organize it remotely: temp copy, session,
    /// upload, entry creation with course admins as editors/publishers,
    /// category resolution, attach. Aborts on the first failure and creates
    /// no local state; the temp copy is removed whichever way this exits.
    pub(crate) fn convert_video(
        &self,
        file: &dyn AreaFile,
        title: &str,
        description: &str,
        course: &Course,
        user: UserId,
    ) -> Result<MediaEntry, ConvertError> {
        let temp = file.copy_to_temp().map_err(|source| ConvertError::TempCopy {
            filename: file.filename().to_string(),
            source,
        })?;
        let result = self.upload_and_organize(&temp, title, description, course, user);
        if let Err(err) = fs::remove_file(&temp) {
            warn!(
                path = %temp.display(),
                error = %err,
                "temp copy could not be deleted"
            );
        }
        let entry = result?;
        info!(entry = %entry.id, filename = file.filename(), "successfully uploaded video");
        Ok(entry)
    }

    fn upload_and_organize(
        &self,
        temp: &Path,
        title: &str,
        description: &str,
        course: &Course,
        user: UserId,
    ) -> Result<MediaEntry, ConvertError> {
        let base = self
            .config
            .base_category_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .ok_or(ConvertError::MissingBaseCategoryPath)?;

        let username = self.modules.username(user)?;
        let session = self
            .media
            .open_session(&username)
            .map_err(ConvertError::Session)?;

        let token = session.upload(temp).map_err(ConvertError::Upload)?;
        let admins = self.modules.course_admins(course.id)?;
        let draft = EntryDraft::with_collaborators(title, description, admins);
        let entry = session
            .add_entry(&draft, &token)
            .map_err(ConvertError::EntryCreate)?;

        let category = self.resolve_category(session.as_ref(), course, base)?;
        session
            .attach_to_category(category.id, &entry.id)
            .map_err(ConvertError::CategoryAttach)?;
        Ok(entry)
    }

    fn build_module_spec(
        &self,
        entry: &MediaEntry,
        args: &ModuleArgs,
        course: &Course,
    ) -> Result<VideoModuleSpec, ConvertError> {
        Ok(VideoModuleSpec {
            entry_id: entry.id.clone(),
            source: embed::player_url(&self.config, &entry.id)?,
            video_title: entry.name.clone(),
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            metadata: embed::metadata_blob(&self.config, entry)?,
            name: args.name.clone(),
            intro: args.intro.clone(),
            intro_format: args.intro_format,
            visible: args.visible,
            id_number: args.id_number.clone(),
            group_mode: args.group_mode,
            grouping_id: args.grouping_id,
            availability: args.availability.clone(),
            course_id: course.id,
            section: args.section,
        })
    }

    /// Attempt to replace a file-bearing module with a remote-video module.
    ///
    /// The old module is deleted only after the replacement was created
    /// *and* reports a non-empty remote entry id; every failure before that
    /// leaves it untouched.
    pub fn convert_and_replace_module(
        &self,
        course: &Course,
        info: &ModuleInfo,
        user: UserId,
    ) -> Result<Conversion, ConvertError> {
        let Some(file) = self.find_main_video(info.context_id, &info.kind)? else {
            // No job to do; stay silent.
            return Ok(Conversion::NoCandidate);
        };
        let args = self.package_args(course, info, &info.name)?;

        // Embedded pluginfile links would break once this module is swapped
        // out, and the same file must not be converted through two routes.
        // Hand the intro to the text rewrite and keep the module.
        if args.intro.contains(PLUGINFILE_TOKEN) {
            if let Some(new_intro) = text::rewrite_module_text(self, info, TextField::Intro, user)?
            {
                self.modules
                    .set_text_field(&info.kind, info.instance, TextField::Intro, &new_intro)?;
            }
            info!(
                module = %info.id,
                "file resource has embedded pluginfiles; leaving the module in place"
            );
            return Ok(Conversion::DelegatedToText);
        }

        let entry = self.convert_video(file.as_ref(), &args.name, &args.description, course, user)?;
        let spec = self.build_module_spec(&entry, &args, course)?;
        let created = self.modules.create_module(&spec, course)?;
        if !created.has_entry() {
            // The orphaned remote entry is accepted; never roll back by
            // deleting the old module on a half-created replacement.
            return Err(ConvertError::MissingEntryId);
        }
        info!(
            instance = %created.instance,
            replaces = %info.id,
            "successfully added replacement video resource"
        );
        self.modules.delete_module(info.id)?;
        Ok(Conversion::Replaced)
    }

    /// Refresh the collaborator list of an existing remote asset to the
    /// course's current admins.
    pub fn add_collaborators(&self, event: &ModuleEvent, user: UserId) -> Result<(), ConvertError> {
        let data = self
            .modules
            .module_data(&event.module_kind, event.instance_id)?;
        let entry_id = data
            .entry_id
            .filter(|id| !id.is_empty())
            .ok_or(ConvertError::MissingEntryId)?;
        let course = self.modules.course(event.course_id)?;
        let admins = self.modules.course_admins(course.id)?;

        let username = self.modules.username(user)?;
        let session = self
            .media
            .open_session(&username)
            .map_err(ConvertError::Session)?;
        session
            .update_collaborators(&entry_id, &admins)
            .map_err(|source| ConvertError::CollaboratorUpdate {
                entry: entry_id.clone(),
                source,
            })?;
        info!(
            entry = %entry_id,
            module = %event.module_id,
            "successfully added course admins as collaborators"
        );
        Ok(())
    }

    /// Convert every file-resource module of a restored course. Per-module
    /// failures are logged and skipped; the rest of the course is still
    /// processed.
    pub fn convert_restored_course(
        &self,
        course_id: CourseId,
        user: UserId,
    ) -> Result<(), ConvertError> {
        let course = self.modules.course(course_id)?;
        for info in self.modules.course_modules(course_id)? {
            if info.kind != ModuleKind::FileResource {
                continue;
            }
            if let Err(err) = self.convert_and_replace_module(&course, &info, user) {
                warn!(
                    kind = %info.kind,
                    module = %info.id,
                    course = %course_id,
                    error = %err,
                    "could not convert course module; skipping"
                );
            }
        }
        Ok(())
    }
}
