//! Column-aligned listing of a plan's ordered steps.

use std::fmt;

use crate::plan::Plan;

use super::quoted;

/// Newtype wrapper rendering a plan as a numbered step listing.
///
/// Each line shows one step as `'old' => 'new'`, with both columns padded
/// to the widest value in the plan so the arrows line up:
///
/// ```text
/// 1.  'foo' => '[b:_temp_:ar_]'
/// 2.  '[b:_temp_:ar_]' => 'bar'
/// ```
pub struct PlanListing<'a>(pub &'a Plan);

impl fmt::Display for PlanListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let steps = self.0.steps();
        if steps.is_empty() {
            return writeln!(f, "No steps planned.");
        }

        let old_width = steps
            .iter()
            .map(|s| quoted(s.old()).len())
            .max()
            .unwrap_or(0);
        let number_width = steps.len().to_string().len() + 1;

        for (index, step) in steps.iter().enumerate() {
            writeln!(
                f,
                "{:<nw$}  {:<ow$} => {}",
                format!("{}.", index + 1),
                quoted(step.old()),
                quoted(step.new_value()),
                nw = number_width,
                ow = old_width,
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemList;
    use crate::token::BracketTag;

    fn plan(raw: &[(&str, &str)], symmetric: bool) -> Plan {
        let pairs: Vec<(String, String)> = raw
            .iter()
            .map(|(o, n)| ((*o).to_string(), (*n).to_string()))
            .collect();
        let items = ItemList::from_pairs(&pairs, &BracketTag).expect("valid pairs");
        Plan::new(&items, symmetric, &BracketTag)
    }

    #[test]
    fn lists_every_step_numbered() {
        let listing = format!("{}", PlanListing(&plan(&[("foo", "bar")], false)));
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("1."));
        assert!(lines[0].contains("'foo'"));
        assert!(lines[0].contains("'[b:_temp_:ar_]'"));
        assert!(lines[1].starts_with("2."));
        assert!(lines[1].ends_with("'bar'"));
    }

    #[test]
    fn arrows_align_across_steps() {
        let listing = format!("{}", PlanListing(&plan(&[("a", "bb"), ("ccc", "d")], false)));
        let columns: Vec<usize> = listing
            .lines()
            .map(|line| line.find("=>").expect("arrow present"))
            .collect();
        assert!(columns.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn empty_plan_prints_placeholder_message() {
        let listing = format!("{}", PlanListing(&plan(&[], false)));
        assert_eq!(listing, "No steps planned.\n");
    }

    #[test]
    fn identical_inputs_render_identically() {
        let a = format!("{}", PlanListing(&plan(&[("cat", "dog")], true)));
        let b = format!("{}", PlanListing(&plan(&[("cat", "dog")], true)));
        assert_eq!(a, b);
    }
}
