use tracing::info;
use git2::{ObjectType, Oid, Reference, Repository};

use crate::author::Author;
use crate::git::error::{BackendError, BackendResult};
use crate::git::utils::GitUtils;

/// Tag operations for git repositories
pub struct TagOps;

impl TagOps {
    /// Create a lightweight tag pointing at `target`
    pub fn create_lightweight_tag(repo: &Repository, name: &str, target: Oid) -> BackendResult<()> {
        let object = repo.find_object(target, None)?;
        repo.tag_lightweight(name, &object, false)?;

        info!("Created lightweight tag {} at {}", name, target);
        Ok(())
    }

    /// Create an annotated tag object pointing at `target`, returns the tag object id.
    ///
    /// The object is written straight to the odb so an empty tagger identity is
    /// accepted, and the message always ends with a newline.
    pub fn create_annotated_tag(
        repo: &Repository,
        name: &str,
        target: Oid,
        message: &str,
        tagger: &Author,
    ) -> BackendResult<Oid> {
        let ref_name = GitUtils::tag_ref(name);
        if !Reference::is_valid_name(&ref_name) {
            return Err(BackendError::InvalidReferenceName(ref_name));
        }
        if repo.find_reference(&ref_name).is_ok() {
            return Err(BackendError::TagExists(name.to_string()));
        }

        let object = repo.find_object(target, None)?;
        let kind = object.kind().unwrap_or(ObjectType::Commit);
        let raw = Self::encode_tag(target, kind, name, &GitUtils::format_identity(tagger)?, message);

        let tag_id = repo.odb()?.write(ObjectType::Tag, raw.as_bytes())?;
        repo.reference(&ref_name, tag_id, false, "create annotated tag")?;

        info!("Created annotated tag {} ({}) at {}", name, tag_id, target);
        Ok(tag_id)
    }

    fn encode_tag(target: Oid, kind: ObjectType, name: &str, tagger: &str, message: &str) -> String {
        let newline = if message.ends_with('\n') { "" } else { "\n" };
        format!(
            "object {}\ntype {}\ntag {}\ntagger {}\n\n{}{}",
            target,
            kind.str(),
            name,
            tagger,
            message,
            newline
        )
    }

    /// Resolve a tag to the commit it ultimately points at
    pub fn resolve_tag(repo: &Repository, name: &str) -> BackendResult<Oid> {
        let reference = repo
            .find_reference(&GitUtils::tag_ref(name))
            .map_err(|source| BackendError::TagNotFound { name: name.to_string(), source })?;
        let commit = reference.peel_to_commit()?;
        Ok(commit.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_tag_appends_newline_once() {
        let target = Oid::from_str("4e9da30d1b7c3d2e6a1fd4c3a0f0c1b2d3e4f5a6").unwrap();

        let raw = TagOps::encode_tag(target, ObjectType::Commit, "v1", " <> 0 +0000", "message1");
        assert_eq!(
            raw,
            "object 4e9da30d1b7c3d2e6a1fd4c3a0f0c1b2d3e4f5a6\ntype commit\ntag v1\ntagger  <> 0 +0000\n\nmessage1\n"
        );

        let raw = TagOps::encode_tag(target, ObjectType::Commit, "v1", " <> 0 +0000", "message1\n");
        assert!(raw.ends_with("\n\nmessage1\n"));
    }
}
