use std::io::{self, Write};

use questionnaire::{Pager, Questionnaire};

/// Write the page layout of `questionnaire` as plain text.
pub fn write_outline<W: Write>(mut out: W, questionnaire: &Questionnaire) -> io::Result<()> {
    writeln!(out, "{}", questionnaire.title)?;
    writeln!(out, "{}", questionnaire.description)?;

    let pager = Pager::new(questionnaire.questions());
    if pager.is_empty() {
        writeln!(out, "(no questions)")?;
        return Ok(());
    }

    for page in pager.pages() {
        writeln!(out)?;
        writeln!(out, "Page {}/{}", page.number(), pager.page_count())?;
        for (number, question) in page.numbered() {
            writeln!(
                out,
                "  Question {}: {} [{}]",
                number,
                question.text(),
                question.kind()
            )?;
            if let Some(follow_up) = question.follow_up() {
                writeln!(out, "    Follow-up: {follow_up}")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use questionnaire::Question;

    #[test]
    fn outline_lists_pages_in_order() {
        let questionnaire = Questionnaire::new(
            "Health",
            "Baseline",
            vec![
                Question::new(1, "Smoke?", "yes_no").with_follow_up("How many?"),
                Question::new(2, "Water?", "open"),
                Question::new(3, "Meals?", "number"),
            ],
        );

        let mut out = Vec::new();
        write_outline(&mut out, &questionnaire).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "Health\nBaseline\n\
             \nPage 1/2\n  Question 1: Smoke? [yes_no]\n    Follow-up: How many?\n  Question 2: Water? [open]\n\
             \nPage 2/2\n  Question 3: Meals? [number]\n"
        );
    }

    #[test]
    fn empty_outline() {
        let questionnaire = Questionnaire::new("Empty", "", Vec::new());
        let mut out = Vec::new();
        write_outline(&mut out, &questionnaire).unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with("(no questions)\n"));
    }
}
