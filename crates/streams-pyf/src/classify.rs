//! Per-line classification of f2py signature-file content.
//!
//! Detection is substring containment, not grammar parsing: the signature
//! file is machine-generated and well-formed, so a line either contains one
//! of the three marker strings or it does not. Marker matching is
//! case-insensitive; extracted subroutine names keep their original case.

/// The `interface` block-open marker.
pub const BLOCK_OPEN_MARKER: &str = "interface";
/// The `end interface` block-close marker.
pub const BLOCK_CLOSE_MARKER: &str = "end interface";
/// The subroutine declaration marker.
pub const SUBROUTINE_MARKER: &str = "subroutine";
/// Name prefix of subroutines that must be bound across the f2py boundary.
pub const WRAP_PREFIX: &str = "wrap_";

/// Classification of a single signature-file line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Opens the interface block.
    BlockOpen,
    /// Closes the interface block.
    BlockClose,
    /// A subroutine declaration with its extracted name. Only produced
    /// while inside the interface block.
    SubroutineDecl {
        /// The declared subroutine name.
        name: String,
    },
    /// Any other line.
    Plain,
}

/// Classify one line given the current block context.
///
/// Returns the classification and the block context for the following line.
/// The close marker is tested before the open marker, since the open marker
/// is a substring of it. A line that carries the subroutine marker but no
/// extractable name is `Plain`.
pub fn classify_line(line: &str, in_interface: bool) -> (LineClass, bool) {
    let lower = line.to_ascii_lowercase();

    if lower.contains(BLOCK_CLOSE_MARKER) {
        return (LineClass::BlockClose, false);
    }
    if lower.contains(BLOCK_OPEN_MARKER) {
        return (LineClass::BlockOpen, true);
    }
    if in_interface && lower.contains(SUBROUTINE_MARKER) {
        if let Some(name) = subroutine_name(line, &lower) {
            return (LineClass::SubroutineDecl { name }, in_interface);
        }
    }

    (LineClass::Plain, in_interface)
}

/// Extract the declared name: the first occurrence of the subroutine marker
/// followed by at least one whitespace character and a run of word
/// characters.
///
/// `lower` is the ASCII-lowercased copy of `line`; lowercasing preserves
/// byte offsets, so marker positions found in `lower` index into `line`.
fn subroutine_name(line: &str, lower: &str) -> Option<String> {
    for (idx, _) in lower.match_indices(SUBROUTINE_MARKER) {
        let rest = &line[idx + SUBROUTINE_MARKER.len()..];
        let trimmed = rest.trim_start();
        if trimmed.len() == rest.len() {
            // No whitespace between the marker and what follows.
            continue;
        }
        let name: String = trimmed
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect();
        if !name.is_empty() {
            return Some(name);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_marker_enters_block() {
        let (class, next) = classify_line("  interface", false);
        assert_eq!(class, LineClass::BlockOpen);
        assert!(next);
    }

    #[test]
    fn close_marker_leaves_block() {
        let (class, next) = classify_line("  end interface", true);
        assert_eq!(class, LineClass::BlockClose);
        assert!(!next);
    }

    #[test]
    fn close_marker_wins_over_open() {
        // "end interface" also contains "interface"
        let (class, _) = classify_line("end interface", true);
        assert_eq!(class, LineClass::BlockClose);
    }

    #[test]
    fn markers_are_case_insensitive() {
        let (class, next) = classify_line("INTERFACE", false);
        assert_eq!(class, LineClass::BlockOpen);
        assert!(next);

        let (class, next) = classify_line("End Interface", true);
        assert_eq!(class, LineClass::BlockClose);
        assert!(!next);
    }

    #[test]
    fn subroutine_inside_block() {
        let (class, next) = classify_line("    subroutine wrap_step(nx,ny)", true);
        assert_eq!(
            class,
            LineClass::SubroutineDecl {
                name: "wrap_step".to_string()
            }
        );
        assert!(next);
    }

    #[test]
    fn subroutine_outside_block_is_plain() {
        let (class, next) = classify_line("    subroutine wrap_step(nx,ny)", false);
        assert_eq!(class, LineClass::Plain);
        assert!(!next);
    }

    #[test]
    fn extracted_name_keeps_case() {
        let (class, _) = classify_line("SUBROUTINE Wrap_Step(n)", true);
        assert_eq!(
            class,
            LineClass::SubroutineDecl {
                name: "Wrap_Step".to_string()
            }
        );
    }

    #[test]
    fn marker_without_name_is_plain() {
        // Marker present but no whitespace-separated name follows
        let (class, _) = classify_line("subroutine", true);
        assert_eq!(class, LineClass::Plain);

        let (class, _) = classify_line("subroutine(x)", true);
        assert_eq!(class, LineClass::Plain);
    }

    #[test]
    fn name_stops_at_first_non_word_character() {
        let (class, _) = classify_line("subroutine wrap_io(a, b)", true);
        assert_eq!(
            class,
            LineClass::SubroutineDecl {
                name: "wrap_io".to_string()
            }
        );
    }

    #[test]
    fn later_marker_occurrence_can_supply_the_name() {
        // The first occurrence is glued to the next token; the second one
        // carries the name, mirroring regex backtracking.
        let (class, _) = classify_line("subroutinex subroutine wrap_y(n)", true);
        assert_eq!(
            class,
            LineClass::SubroutineDecl {
                name: "wrap_y".to_string()
            }
        );
    }

    #[test]
    fn plain_line_passes_through() {
        let (class, next) = classify_line("integer intent(in) :: nx", true);
        assert_eq!(class, LineClass::Plain);
        assert!(next);

        let (class, next) = classify_line("python module libstreams", false);
        assert_eq!(class, LineClass::Plain);
        assert!(!next);
    }

    #[test]
    fn end_subroutine_also_classifies_as_declaration() {
        // Substring detection is deliberately permissive: any line carrying
        // the marker and an extractable name reads as a declaration.
        let (class, _) = classify_line("end subroutine wrap_step", true);
        assert_eq!(
            class,
            LineClass::SubroutineDecl {
                name: "wrap_step".to_string()
            }
        );
    }
}
