use std::collections::HashMap;
use crate::config::CompilerOptions;
use crate::diagnostics::{Diagnostic, DiagnosticCode, Diagnostics};
use crate::resolver::FunctionInfo;
use super::types::{Assembly, PipelineStep, StepOutputs};

/// Build one pipeline step per function, in the order supplied.
///
/// Step names are `<identifier><step_suffix>`. Two functions with the same
/// identifier are a `NameCollision`; the first keeps its step.
pub fn build_assembly(
    functions: &[FunctionInfo],
    options: &CompilerOptions,
    diagnostics: &mut Diagnostics,
) -> Assembly {
    let mut owners: HashMap<&str, &FunctionInfo> = HashMap::new();
    let mut steps = Vec::with_capacity(functions.len());

    for function in functions {
        if let Some(first) = owners.get(function.identifier.as_str()) {
            diagnostics.push(
                Diagnostic::error(
                    DiagnosticCode::NameCollision,
                    format!(
                        "Function '{}' and function '{}' (node '{}') both compile to identifier '{}'",
                        function.label, first.label, first.id, function.identifier
                    ),
                )
                .with_node(&function.id),
            );
            continue;
        }
        owners.insert(function.identifier.as_str(), function);

        steps.push(PipelineStep {
            node_id: function.id.clone(),
            name: format!("{}{}", function.identifier, options.step_suffix),
            func: function.identifier.clone(),
            inputs: function.inputs.iter().map(|d| d.name.clone()).collect(),
            outputs: StepOutputs::from_names(
                function.outputs.iter().map(|d| d.name.clone()).collect(),
            ),
        });
    }

    tracing::debug!(steps = steps.len(), "assembled pipeline");
    Assembly { steps }
}
