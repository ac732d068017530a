//! Embedded-video rewriting in module text fields.
//!
//! Scans a text field for embedded-file markers, converts each referenced
//! video independently, and splices player embed markers in their place.
//! This path only rewrites text; it never creates or deletes modules, and
//! the old embedded files are cleaned up by the host on its own.

use tracing::{info, warn};

use medialift_core::{TextField, UserId};
use medialift_host::{AreaFile, ModuleInfo, is_video};

use crate::embed::{self, MARKER_END, MARKER_START, PLAYER_HEIGHT, PLAYER_WIDTH};
use crate::error::ConvertError;
use crate::orchestrator::Converter;

/// Exact name match (case-sensitive, URL-decoded) among the video files of
/// the area.
fn find_video_by_name<'a>(
    files: &'a [std::sync::Arc<dyn AreaFile>],
    decoded_name: &str,
) -> Option<&'a dyn AreaFile> {
    files
        .iter()
        .map(|file| file.as_ref())
        .find(|file| is_video(*file) && file.filename() == decoded_name)
}

/// Rewrite one text field of a module, returning the new text only if at
/// least one marker was replaced.
///
/// Per-file conversion failures are logged and skipped so one broken video
/// does not block the rest of the field. On any change, the cached course
/// structure is invalidated.
pub(crate) fn rewrite_module_text(
    converter: &Converter,
    info: &ModuleInfo,
    field: TextField,
    user: UserId,
) -> Result<Option<String>, ConvertError> {
    let files =
        converter
            .files()
            .area_files(info.context_id, &info.kind.component(), field.name())?;
    if files.is_empty() {
        return Ok(None);
    }

    let course = converter.modules().course(info.course_id)?;
    let data = converter.modules().module_data(&info.kind, info.instance)?;
    let text = match field {
        TextField::Intro => data.intro,
        TextField::Content => data.content.unwrap_or_default(),
    };

    let names = embed::embedded_filenames(&text);
    let total = names.len();
    let mut new_text = text.clone();
    let mut converted = 0usize;

    for encoded in names {
        let decoded = match urlencoding::decode(encoded) {
            Ok(decoded) => decoded.into_owned(),
            Err(err) => {
                warn!(name = encoded, error = %err, "embedded filename is not valid UTF-8");
                continue;
            }
        };
        let Some(file) = find_video_by_name(&files, &decoded) else {
            continue;
        };

        let title = file.filename().to_string();
        let entry = match converter.convert_video(file, &title, "", &course, user) {
            Ok(entry) => entry,
            Err(err) => {
                warn!(
                    filename = %title,
                    module = %info.id,
                    error = %err,
                    "failed to convert embedded video"
                );
                continue;
            }
        };

        let url = embed::player_url(converter.config(), &entry.id)?;
        let replacement = embed::embed_marker(&url, encoded, PLAYER_WIDTH, PLAYER_HEIGHT);
        // The full original marker: encoded name in the href, decoded name
        // as the link text. Literal replacement, not pattern matching.
        let target = format!("{MARKER_START}{encoded}{MARKER_END}{decoded}</a>");
        let occurrences = new_text.matches(target.as_str()).count();
        new_text = new_text.replace(target.as_str(), &replacement);

        if occurrences > 0 {
            converted += 1;
            if occurrences > 1 {
                // Same marker matched more than once; likely a filename
                // collision, and some replacement was probably unwanted.
                warn!(
                    filename = %decoded,
                    field = %field,
                    module = %info.id,
                    occurrences,
                    "more than one replacement occurred for a single embedded file"
                );
            }
        } else {
            warn!(
                entry = %entry.id,
                filename = %decoded,
                module = %info.id,
                "video was uploaded but not added to the text; the remote entry should probably be removed"
            );
        }
    }

    if converted == 0 {
        return Ok(None);
    }
    info!(
        converted,
        total,
        field = %field,
        module = %info.id,
        "replaced embedded files with remote videos"
    );
    converter.modules().invalidate_course_cache(course.id)?;
    Ok(Some(new_text))
}
