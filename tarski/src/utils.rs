use crate::{
    constants::*,
    structures::Property,
    terminal::{Style, Stylus},
};
use anyhow::{Context, Error};
use itertools::Itertools;
use tarski_model::semantics::{Assignment, Element, Model};

pub(crate) fn stylus(color: bool) -> Stylus {
    let mut stylus = Stylus::new();
    if color {
        stylus.insert_style(
            STYLE_LOGO,
            Style::new().foreground(59).attribute(term::Attr::Dim),
        );
        stylus.insert_style(
            STYLE_INFO,
            Style::new().foreground(59).attribute(term::Attr::Bold),
        );
        stylus.insert_style(STYLE_THEORY, Style::new().foreground(252));
        stylus.insert_style(
            STYLE_MODEL_UNIVERSE,
            Style::new().foreground(252).attribute(term::Attr::Bold),
        );
        stylus.insert_style(STYLE_PASS, Style::new().foreground(term::color::GREEN));
        stylus.insert_style(
            STYLE_FAIL,
            Style::new()
                .foreground(term::color::RED)
                .attribute(term::Attr::Bold),
        );
    }

    stylus
}

pub(crate) fn print_model<E: Element>(title: &str, model: &Model<E>, stylus: &Stylus) {
    stylus.println(STYLE_INFO, format!("{}\n", title));

    if !model.theory().axioms().is_empty() {
        stylus.println(STYLE_INFO, "Axioms:");
        stylus.set(STYLE_THEORY);
        model.theory().axioms().iter().for_each(|a| println!("  {}", a));
        println!();
    }

    let universe = model.universe().iter().map(|e| format!("{:?}", e)).join(", ");
    stylus.println(STYLE_INFO, "Universe:");
    stylus.println(STYLE_MODEL_UNIVERSE, format!("  {}\n", universe));
    stylus.println(STYLE_INFO, "Properties:");
}

/// Evaluates the sentence of `property` in `model` under `assignment`, prints the outcome and
/// fails if the truth value is not the expected one.
pub(crate) fn check<E: Element>(
    model: &Model<E>,
    property: &Property,
    assignment: &Assignment<E>,
    stylus: &Stylus,
) -> Result<(), Error> {
    let holds = model
        .holds(&property.sentence, assignment)
        .with_context(|| format!("failed to evaluate {}", property.name))?;
    let expected = holds == property.expected;

    stylus.set(if expected { STYLE_PASS } else { STYLE_FAIL });
    print!("  {} ", if expected { "✔" } else { "✘" });
    stylus.println(
        STYLE_THEORY,
        format!("{} ({}): {}", property.name, property.sentence, holds),
    );

    if expected {
        Ok(())
    } else {
        Err(Error::msg(format!(
            "{} was expected to be {}",
            property.name, property.expected
        )))
    }
}

pub(crate) fn print_separator(stylus: &Stylus) {
    stylus.println(
        STYLE_INFO,
        "\n- - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -\n",
    );
}
