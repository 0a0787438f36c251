//! The fixed set of remote file operations

/// One of the six Files API actions.
///
/// Each variant maps to a constant relative path under the API base URL.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Operation {
    /// `POST /file/upload`
    Upload,
    /// `GET /file/get`
    Get,
    /// `GET /file/list`
    List,
    /// `GET /file/status`
    Status,
    /// `POST /file/rename`
    Rename,
    /// `DELETE /file/delete`
    Delete,
}

impl Operation {
    /// The relative path segment for this operation
    pub fn path(self) -> &'static str {
        match self {
            Operation::Upload => "/file/upload",
            Operation::Get => "/file/get",
            Operation::List => "/file/list",
            Operation::Status => "/file/status",
            Operation::Rename => "/file/rename",
            Operation::Delete => "/file/delete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_fixed() {
        assert_eq!(Operation::Upload.path(), "/file/upload");
        assert_eq!(Operation::Delete.path(), "/file/delete");
    }
}
