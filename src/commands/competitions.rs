use crate::competitions::Competition;
use crate::formatting::format_header;

pub fn format_competitions(competitions: &[Competition]) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", format_header("Competitions", true)));
    for (i, competition) in competitions.iter().enumerate() {
        output.push_str(&format!(
            "{:>2}. {:<12} {:<24} (id {})\n",
            i + 1,
            competition.name,
            competition.display_name,
            competition.id
        ));
    }
    output
}

pub fn run() {
    print!("{}", format_competitions(crate::competitions::all()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::competitions;

    #[test]
    fn test_lists_every_competition_in_tab_order() {
        let output = format_competitions(competitions::all());
        let lines: Vec<&str> = output.lines().filter(|l| l.contains("(id ")).collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with(" 1. EPL"));
        assert!(lines[5].contains("UEFA Champions League"));
        assert!(lines[5].ends_with("(id 572)"));
    }
}
