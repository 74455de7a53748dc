//! The two-line summary printed after each line has been checked

use serde::Serialize;
use tinytemplate::TinyTemplate;
use tracing::warn;

use super::messages::highlight;
use crate::language::Analysis;
use crate::rendering::{Identity, Render, Syntax};

static TEMPLATE: &str = "Read expression: {consumed}\nArithmetic expression is {status}";

#[derive(Serialize)]
struct Context {
    consumed: String,
    status: String,
}

/// Summarize an analysis: the symbols read, in order and including any end
/// marker, followed by whether the line was valid.
pub fn report(analysis: &Analysis) -> String {
    report_with(analysis, &Identity)
}

pub fn report_with(analysis: &Analysis, renderer: &dyn Render) -> String {
    let consumed = analysis
        .consumed
        .symbols()
        .iter()
        .map(|symbol| highlight(*symbol, renderer))
        .collect::<String>();

    let status = if analysis.is_valid() {
        renderer.style(Syntax::Valid, "valid")
    } else {
        renderer.style(Syntax::Invalid, "invalid")
    };

    let context = Context { consumed, status };

    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);

    let result = tt
        .add_template("report", TEMPLATE)
        .and_then(|_| tt.render("report", &context));

    match result {
        Ok(rendered) => rendered,
        Err(error) => {
            warn!(?error, "report template failed");
            format!(
                "Read expression: {}\nArithmetic expression is {}",
                context.consumed, context.status
            )
        }
    }
}
