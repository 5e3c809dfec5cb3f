//! Output JSON formatting for heat simulations

use crate::config::HeatConfig;
use crate::field::TemperatureField;
use crate::solve::HeatSolution;

fn field_stats(field: &TemperatureField) -> serde_json::Value {
    serde_json::json!({
        "min": field.min(),
        "max": field.max(),
        "mean": field.mean(),
    })
}

/// Create output JSON for one solve
///
/// `frames` is only present when the Jacobi trace was captured.
pub fn create_output_json(
    config: &HeatConfig,
    solution: &HeatSolution,
    solver_name: &str,
) -> serde_json::Value {
    let mut output = serde_json::json!({
        "grid": {
            "size": solution.field.size,
            "points": solution.field.size * solution.field.size,
        },
        "boundary": config.boundary,
        "solver": solver_name,
        "iterations": solution.iterations,
        "residual": solution.residual,
        "temperature": solution.field.to_rows(),
        "stats": field_stats(&solution.field),
        "metadata": config.metadata,
    });

    if let Some(frames) = &solution.frames {
        output["frames"] = serde_json::Value::Array(
            frames
                .iter()
                .map(|frame| serde_json::json!(frame.to_rows()))
                .collect(),
        );
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::create_default_config;
    use crate::solve::{SolverConfig, SolverType, solve};
    use solvers::JacobiConfig;

    #[test]
    fn test_output_shape() {
        let mut config = create_default_config();
        config.grid.size = 3;
        let problem = config.to_problem().unwrap();
        let solution = solve(&problem, &config.to_solver_config().unwrap()).unwrap();

        let json = create_output_json(&config, &solution, "jacobi");
        assert_eq!(json["grid"]["size"], 3);
        assert_eq!(json["grid"]["points"], 9);
        assert_eq!(json["solver"], "jacobi");
        assert_eq!(json["iterations"], solution.iterations);
        assert_eq!(json["boundary"]["left"], 100.0);

        let rows = json["temperature"].as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].as_array().unwrap().len(), 3);
        assert_eq!(rows[1][1].as_f64().unwrap(), solution.field.values[[1, 1]]);

        assert!(json["stats"]["max"].as_f64().unwrap() <= 100.0);
        assert!(json.get("frames").is_none());
    }

    #[test]
    fn test_output_with_frames() {
        let mut config = create_default_config();
        config.grid.size = 2;
        let problem = config.to_problem().unwrap();
        let solver = SolverConfig {
            solver_type: SolverType::Jacobi,
            jacobi: JacobiConfig::default().with_trace(),
            ..Default::default()
        };
        let solution = solve(&problem, &solver).unwrap();

        let json = create_output_json(&config, &solution, "jacobi");
        let frames = json["frames"].as_array().unwrap();
        assert_eq!(frames.len(), solution.iterations);
        assert_eq!(frames.last().unwrap(), &json["temperature"]);
    }
}
