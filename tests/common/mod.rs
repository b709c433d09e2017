#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::fs;
use std::path::{Path, PathBuf};

use rust_symphony::{
    LpModelBuilder, ModelBuilder, ModelDocument, Result, SolverInvocation, SolverProcess,
    SolverRun,
};

// ---------- Porridge model: seven ingredients, two of them prefixes of others ----------

pub struct Ingredient {
    pub name: &'static str,
    pub protein: f64,
    pub calories: f64,
    pub price: f64,
}

pub fn ingredients() -> Vec<Ingredient> {
    vec![
        Ingredient { name: "wildRice", protein: 4.0, calories: 101.0, price: 5.0 },
        Ingredient { name: "wildRice2", protein: 3.0, calories: 150.0, price: 4.0 },
        Ingredient { name: "buckwheatGroats", protein: 19.0, calories: 568.0, price: 10.0 },
        Ingredient { name: "amaranth", protein: 9.3, calories: 251.0, price: 3.0 },
        Ingredient { name: "millet", protein: 22.0, calories: 286.0, price: 5.0 },
        Ingredient { name: "oats", protein: 5.0, calories: 140.0, price: 2.0 },
        Ingredient { name: "buckwheatGroats2", protein: 5.4, calories: 177.0, price: 1.5 },
    ]
}

pub const TOTALS: [&str; 3] = ["totalProtein", "totalCalories", "totalCost"];

/// Maximize protein with at least 2000 kcal on a fixed budget
pub struct Porridge {
    pub data: Vec<Ingredient>,
    pub budget: f64,
}

impl Porridge {
    pub fn new(budget: f64) -> Self {
        Porridge {
            data: ingredients(),
            budget,
        }
    }

    fn terms(&self, metric: fn(&Ingredient) -> f64) -> String {
        self.data
            .iter()
            .map(|i| format!("{} {}", metric(i), i.name))
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

impl ModelBuilder for Porridge {
    fn create(&self) -> Result<ModelDocument> {
        LpModelBuilder::new()
            .maximize("totalProtein")
            .subject_to(format!("{} + -totalProtein = 0", self.terms(|i| i.protein)))
            .subject_to(format!("{} + -totalCalories = 0", self.terms(|i| i.calories)))
            .subject_to(format!("{} + -totalCost = 0", self.terms(|i| i.price)))
            .subject_to("totalCalories >= 2000")
            .subject_to(format!("totalCost <= {}", self.budget))
            .variables(self.data.iter().map(|i| i.name))
            .variables(TOTALS)
            .build()
    }
}

// Tokens follow registration order: ingredients x1..x7, then the totals x8..x10.
pub const FEASIBLE_OUTPUT: &str = "\
Solving...

Solution Found: Node 0, Level 0
Solution Cost: 76.7316
+++++++++++++++++++++++++++++++++++++++++++++++++++
Column names and values of nonzeros in the solution
+++++++++++++++++++++++++++++++++++++++++++++++++++
x5                           1.1842
x7                           9.3860
x8                          76.7316
x9                        2000.0000
x10                         20.0000

";

pub const INFEASIBLE_OUTPUT: &str = "\
Solving...

Problem Infeasible
Total Wallclock Time         0.000
";

// ---------- In-process solver stand-in ----------

/// Writes canned output to the solution artifact and records what it was given
pub struct ScriptedSolver {
    output: String,
    run: SolverRun,
    calls: Cell<usize>,
    converted: RefCell<Vec<String>>,
}

impl ScriptedSolver {
    pub fn new(output: &str) -> Self {
        ScriptedSolver {
            output: output.to_string(),
            run: SolverRun::success(),
            calls: Cell::new(0),
            converted: RefCell::new(Vec::new()),
        }
    }

    pub fn with_run(mut self, run: SolverRun) -> Self {
        self.run = run;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Converted documents seen so far
    pub fn converted(&self) -> Vec<String> {
        self.converted.borrow().clone()
    }
}

impl SolverProcess for ScriptedSolver {
    fn run(&self, invocation: &SolverInvocation) -> Result<SolverRun> {
        self.calls.set(self.calls.get() + 1);
        self.converted
            .borrow_mut()
            .push(fs::read_to_string(invocation.converted)?);
        fs::write(invocation.solution, &self.output)?;
        Ok(self.run)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

// ---------- Shell scripts standing in for the SYMPHONY binary ----------

#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Script that echoes its arguments and then prints `output`
#[cfg(unix)]
pub fn echo_script(dir: &Path, output: &str) -> PathBuf {
    let body = format!("echo \"args: $*\"\ncat <<'SOLVER_OUTPUT'\n{}\nSOLVER_OUTPUT", output);
    write_script(dir, "symphony.sh", &body)
}
