use computor_compute::{
    fmt::{FormatOptions, Number, ReducedForm},
    Resolution,
    Solution,
};

/// Describes the given resolution as the lines of text shown to the user.
pub fn present(resolution: &Resolution, options: FormatOptions) -> Vec<String> {
    let mut lines = vec![
        format!("Reduced form: {}", ReducedForm::new(&resolution.reduced, options)),
        format!("Polynomial degree: {}", resolution.degree),
    ];

    let solved = match &resolution.outcome {
        Ok(solved) => solved,
        Err(_) => {
            lines.push("The polynomial degree is strictly greater than 2, I can't solve.".to_string());
            return lines;
        },
    };

    if let Some(discriminant) = solved.discriminant {
        lines.push(format!("Discriminant: {}", Number::solution(discriminant)));
    }

    match solved.solution {
        Solution::AllReals => lines.push("All real numbers are solutions".to_string()),
        Solution::NoSolution => lines.push("This equation has no solution".to_string()),
        Solution::OneReal { x } if solved.discriminant.is_some() => lines.extend([
            "Discriminant is zero, the solution is:".to_string(),
            Number::solution(x).to_string(),
        ]),
        Solution::OneReal { x } => lines.push(format!("The solution is: {}", Number::solution(x))),
        Solution::TwoReal { x1, x2 } => lines.extend([
            "Discriminant is strictly positive, the two solutions are:".to_string(),
            Number::solution(x1).to_string(),
            Number::solution(x2).to_string(),
        ]),
        Solution::TwoComplex { real, imaginary } => {
            let (real, imaginary) = (Number::solution(real), Number::solution(imaginary));
            lines.extend([
                "Discriminant is strictly negative, the two complex solutions are:".to_string(),
                format!("{} - i * {}", real, imaginary),
                format!("{} + i * {}", real, imaginary),
            ]);
        },
    }

    lines
}
