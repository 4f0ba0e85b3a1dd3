//! Pipeline-assembly emitter
//!
//! Renders the `create_pipeline` module wiring every step to its datasets.

use crate::assembly::{Assembly, PipelineStep, StepOutputs};
use crate::config::CompilerOptions;
use super::{pad, py_str};

/// Emit the pipeline module for an assembled pipeline
pub fn emit_pipeline_module(assembly: &Assembly, options: &CompilerOptions) -> String {
    let p1 = pad(1);
    let p2 = pad(2);

    let mut out = format!(
        "\"\"\"\nThis is a generated Kedro pipeline definition.\nGenerated by {}.\n\"\"\"\n\
         from kedro.pipeline import Pipeline, node, pipeline\n",
        options.generator
    );

    let functions = assembly.functions();
    if !functions.is_empty() {
        out.push_str(&format!("from .nodes import {}\n", functions.join(", ")));
    }

    out.push_str(&format!(
        "\n\ndef create_pipeline(**kwargs) -> Pipeline:\n\
         {p1}\"\"\"Create the project's pipeline.\n\
         \n\
         {p1}Returns:\n\
         {p2}Pipeline: The pipeline definition.\n\
         {p1}\"\"\"\n\
         {p1}return pipeline(\n\
         {p2}[\n"
    ));

    for step in &assembly.steps {
        out.push_str(&emit_step(step));
    }

    out.push_str(&format!("{p2}]\n{p1})\n"));
    out
}

fn emit_step(step: &PipelineStep) -> String {
    let p3 = pad(3);
    let p4 = pad(4);

    let inputs: Vec<String> = step.inputs.iter().map(|i| py_str(i)).collect();
    let outputs = match &step.outputs {
        StepOutputs::None => "None".to_string(),
        StepOutputs::Single(name) => py_str(name),
        StepOutputs::Many(names) => format!(
            "[{}]",
            names.iter().map(|n| py_str(n)).collect::<Vec<_>>().join(", ")
        ),
    };

    format!(
        "{p3}node(\n\
         {p4}func={func},\n\
         {p4}inputs=[{inputs}],\n\
         {p4}outputs={outputs},\n\
         {p4}name={name},\n\
         {p3}),\n",
        func = step.func,
        inputs = inputs.join(", "),
        name = py_str(&step.name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(func: &str, inputs: &[&str], outputs: StepOutputs) -> PipelineStep {
        PipelineStep {
            node_id: format!("n-{}", func),
            name: format!("{}_node", func),
            func: func.to_string(),
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            outputs,
        }
    }

    #[test]
    fn test_single_step_module() {
        let assembly = Assembly {
            steps: vec![step(
                "process_data",
                &["raw_data"],
                StepOutputs::Single("processed_data".into()),
            )],
        };
        let text = emit_pipeline_module(&assembly, &CompilerOptions::default());

        let expected = "\
\"\"\"
This is a generated Kedro pipeline definition.
Generated by Kedro Pipeline Painter.
\"\"\"
from kedro.pipeline import Pipeline, node, pipeline
from .nodes import process_data


def create_pipeline(**kwargs) -> Pipeline:
    \"\"\"Create the project's pipeline.

    Returns:
        Pipeline: The pipeline definition.
    \"\"\"
    return pipeline(
        [
            node(
                func=process_data,
                inputs=[\"raw_data\"],
                outputs=\"processed_data\",
                name=\"process_data_node\",
            ),
        ]
    )
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_output_specs() {
        let assembly = Assembly {
            steps: vec![
                step("split", &["raw"], StepOutputs::Many(vec!["a".into(), "b".into()])),
                step("report", &["a", "b"], StepOutputs::None),
            ],
        };
        let text = emit_pipeline_module(&assembly, &CompilerOptions::default());

        assert!(text.contains("from .nodes import split, report\n"));
        assert!(text.contains("outputs=[\"a\", \"b\"],\n"));
        assert!(text.contains("inputs=[\"a\", \"b\"],\n"));
        assert!(text.contains("outputs=None,\n"));
    }

    #[test]
    fn test_empty_inputs_render_empty_list() {
        let assembly = Assembly {
            steps: vec![step("seed", &[], StepOutputs::Single("seed_data".into()))],
        };
        let text = emit_pipeline_module(&assembly, &CompilerOptions::default());
        assert!(text.contains("inputs=[],\n"));
    }

    #[test]
    fn test_empty_assembly_has_no_import() {
        let text = emit_pipeline_module(&Assembly::default(), &CompilerOptions::default());
        assert!(!text.contains("from .nodes import"));
        assert!(text.ends_with("        [\n        ]\n    )\n"));
    }
}
