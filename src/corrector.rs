/*!
 * Patch-type correction for a written blockMeshDict.
 *
 * The boundary list names each patch on a bare identifier line followed by a
 * brace-delimited block of attribute lines. The serializer writes every
 * patch with `type patch;`, so the symmetry patch's type is rewritten here
 * after the fact. The rewrite is a single-pass line-oriented state machine
 * rather than a full parser; the dictionary format is a general nested-block
 * language and this task only touches one attribute of one named block.
 */

/// Patch-correction error type.
#[derive(Debug)]
pub enum CorrectorError {
    /// IO error.
    IoError(crate::io::IoError),
    /// The patch name never appeared in the scanned text.
    PatchNotFound{patch_name: String, patch_type: String},
    /// The patch name appeared, but no block was opened before end-of-file.
    BlockNotOpened{patch_name: String, patch_type: String},
    /// The patch block was entered, but contained no type attribute line.
    TypeAttributeMissing{patch_name: String, patch_type: String},
}
impl std::fmt::Display for CorrectorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorrectorError::IoError(error) => write!(f, "IO Error:\n{}", error),
            CorrectorError::PatchNotFound{patch_name, patch_type} => write!(f,
                "Failed to set patch \"{}\" type to \"{}\": patch not found in the descriptor",
                patch_name, patch_type),
            CorrectorError::BlockNotOpened{patch_name, patch_type} => write!(f,
                "Failed to set patch \"{}\" type to \"{}\": patch name seen, but no block opened before end of file",
                patch_name, patch_type),
            CorrectorError::TypeAttributeMissing{patch_name, patch_type} => write!(f,
                "Failed to set patch \"{}\" type to \"{}\": patch block has no type attribute",
                patch_name, patch_type),
        }
    }
}
impl From<crate::io::IoError> for CorrectorError {
    fn from(error: crate::io::IoError) -> Self {
        CorrectorError::IoError(error)
    }
}

/// Result type for the `corrector` module.
pub type ProcResult<T> = std::result::Result<T, CorrectorError>;

/// Scanner state while walking the descriptor line by line.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ScanState {
    /// Looking for the target patch name.
    Searching,
    /// Name line matched; waiting for the opening brace of its block.
    Armed,
    /// Inside the target patch's block, rewriting attributes.
    InBlock,
}

/// Rewrite the `type` attribute of the named patch block in descriptor text.
/// Every line not explicitly rewritten passes through byte-identical,
/// including its line terminator; line count and order are preserved.
/// Fails if no attribute line was rewritten by the end of the scan.
pub fn rewrite_patch_type(text: &str, patch_name: &str, patch_type: &str) -> ProcResult<String> {
    let mut state = ScanState::Searching;
    let mut entered_block = false;
    let mut changed = false;
    let mut updated = String::with_capacity(text.len());

    for raw_line in text.split_inclusive('\n') {
        let terminator = if raw_line.ends_with("\r\n") {
            "\r\n"
        } else if raw_line.ends_with('\n') {
            "\n"
        } else {
            ""
        };
        let body = &raw_line[..raw_line.len() - terminator.len()];
        let stripped = body.trim();

        match state {
            ScanState::Searching => {
                if stripped == patch_name {
                    state = ScanState::Armed;
                }
            },
            ScanState::Armed => {
                // Lines between the name and the brace pass through and do
                // not reset the state; the name line itself may repeat.
                if stripped.starts_with('{') {
                    state = ScanState::InBlock;
                    entered_block = true;
                }
            },
            ScanState::InBlock => {
                if stripped.starts_with("type") {
                    let indent = &body[..body.len() - body.trim_start().len()];
                    updated.push_str(indent);
                    updated.push_str("type ");
                    updated.push_str(patch_type);
                    updated.push(';');
                    updated.push_str(terminator);
                    changed = true;
                    continue;
                }
                if stripped.starts_with('}') {
                    state = ScanState::Searching;
                }
            },
        }
        updated.push_str(raw_line);
    }

    if changed {
        return Ok(updated);
    }
    let patch_name = patch_name.to_string();
    let patch_type = patch_type.to_string();
    if state == ScanState::Armed {
        Err(CorrectorError::BlockNotOpened{patch_name, patch_type})
    } else if entered_block {
        Err(CorrectorError::TypeAttributeMissing{patch_name, patch_type})
    } else {
        Err(CorrectorError::PatchNotFound{patch_name, patch_type})
    }
}

/// Ensure the named patch uses the desired type inside the written descriptor.
/// Read-modify-write of the whole file; on any failure the file on disk is
/// left untouched, since a silently uncorrected descriptor would carry a
/// default type the caller explicitly tried to override.
pub fn enforce_patch_type(descriptor_path: &str, patch_name: &str, patch_type: &str) -> ProcResult<()> {
    let text = crate::io::read_to_string(descriptor_path)?;
    let updated = rewrite_patch_type(&text, patch_name, patch_type)?;
    crate::io::write_to_file(descriptor_path, &updated)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESCRIPTOR: &str = concat!(
        "boundary\n",
        "(\n",
        "    inlet\n",
        "    {\n",
        "        type patch;\n",
        "        faces\n",
        "        (\n",
        "            (0 3 2 1)\n",
        "        );\n",
        "    }\n",
        "    symmetryPlane\n",
        "    {\n",
        "        type patch;\n",
        "        faces\n",
        "        (\n",
        "            (0 1 8 7)\n",
        "        );\n",
        "    }\n",
        ");\n",
    );

    #[test]
    fn rewrites_only_the_target_patch_type() {
        let updated = rewrite_patch_type(DESCRIPTOR, "symmetryPlane", "symmetry").unwrap();
        assert_eq!(updated.matches("type symmetry;").count(), 1);
        // The inlet block keeps its type; only the symmetry block changed.
        let inlet_at = updated.find("inlet").unwrap();
        let symmetry_at = updated.find("symmetryPlane").unwrap();
        assert!(updated[inlet_at..symmetry_at].contains("type patch;"));
        assert!(updated[symmetry_at..].contains("        type symmetry;\n"));
    }

    #[test]
    fn untouched_lines_are_byte_identical() {
        let updated = rewrite_patch_type(DESCRIPTOR, "symmetryPlane", "symmetry").unwrap();
        let original_lines: Vec<&str> = DESCRIPTOR.lines().collect();
        let updated_lines: Vec<&str> = updated.lines().collect();
        assert_eq!(original_lines.len(), updated_lines.len());
        let mut diffs = 0;
        for (original, updated) in original_lines.iter().zip(updated_lines.iter()) {
            if original != updated {
                diffs += 1;
                assert_eq!(*updated, "        type symmetry;");
            }
        }
        assert_eq!(diffs, 1);
    }

    #[test]
    fn rewrite_is_idempotent() {
        let once = rewrite_patch_type(DESCRIPTOR, "symmetryPlane", "symmetry").unwrap();
        let twice = rewrite_patch_type(&once, "symmetryPlane", "symmetry").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn indentation_is_preserved() {
        let text = "symmetryPlane\n{\n\t  type patch;\n}\n";
        let updated = rewrite_patch_type(text, "symmetryPlane", "symmetry").unwrap();
        assert_eq!(updated, "symmetryPlane\n{\n\t  type symmetry;\n}\n");
    }

    #[test]
    fn crlf_terminators_are_preserved() {
        let text = "symmetryPlane\r\n{\r\n    type patch;\r\n}\r\n";
        let updated = rewrite_patch_type(text, "symmetryPlane", "symmetry").unwrap();
        assert_eq!(updated, "symmetryPlane\r\n{\r\n    type symmetry;\r\n}\r\n");
    }

    #[test]
    fn stray_name_occurrence_rearms_without_editing_other_blocks() {
        // The name appears once with no block of its own; the scanner arms,
        // sees the next brace, and edits the block it actually enters.
        let text = concat!(
            "symmetryPlane\n",
            "extra line\n",
            "{\n",
            "    type patch;\n",
            "}\n",
        );
        let updated = rewrite_patch_type(text, "symmetryPlane", "symmetry").unwrap();
        assert!(updated.contains("    type symmetry;\n"));
        assert!(updated.contains("extra line\n"));
    }

    #[test]
    fn block_closed_disarms_the_scanner() {
        // After the target block closes, later blocks are not edited.
        let text = concat!(
            "symmetryPlane\n",
            "{\n",
            "    type patch;\n",
            "}\n",
            "outlet\n",
            "{\n",
            "    type patch;\n",
            "}\n",
        );
        let updated = rewrite_patch_type(text, "symmetryPlane", "symmetry").unwrap();
        assert_eq!(updated.matches("type symmetry;").count(), 1);
        assert!(updated.ends_with("outlet\n{\n    type patch;\n}\n"));
    }

    #[test]
    fn missing_patch_is_an_explicit_error() {
        let error = rewrite_patch_type(DESCRIPTOR, "noSuchPatch", "symmetry").unwrap_err();
        match error {
            CorrectorError::PatchNotFound{patch_name, patch_type} => {
                assert_eq!(patch_name, "noSuchPatch");
                assert_eq!(patch_type, "symmetry");
            },
            other => panic!("Expected PatchNotFound, got: {}", other),
        }
    }

    #[test]
    fn name_without_block_is_a_distinct_error() {
        let text = "symmetryPlane\nno brace follows\n";
        let error = rewrite_patch_type(text, "symmetryPlane", "symmetry").unwrap_err();
        assert!(matches!(error, CorrectorError::BlockNotOpened{..}));
    }

    #[test]
    fn block_without_type_attribute_is_a_distinct_error() {
        let text = "symmetryPlane\n{\n    faces ();\n}\n";
        let error = rewrite_patch_type(text, "symmetryPlane", "symmetry").unwrap_err();
        assert!(matches!(error, CorrectorError::TypeAttributeMissing{..}));
    }

    #[test]
    fn failed_enforce_leaves_the_file_untouched() {
        let dir = std::env::temp_dir().join(format!("qcmesh_corrector_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("blockMeshDict");
        let path_str = path.to_str().unwrap();
        std::fs::write(&path, DESCRIPTOR).unwrap();

        assert!(enforce_patch_type(path_str, "noSuchPatch", "symmetry").is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DESCRIPTOR);

        enforce_patch_type(path_str, "symmetryPlane", "symmetry").unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("type symmetry;"));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
