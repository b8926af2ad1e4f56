mod repl {
    use symdiff::FunctionParser;

    // 'EXPR' or 'EXPR @ POINT'. '@' can't show up inside an expression.
    fn split_point(input: &str) -> (&str, Option<&str>) {
        match input.split_once('@') {
            Some((expr, point)) => (expr, Some(point.trim())),
            None => (input, None),
        }
    }

    // Returns true if the expression parsed, so the caller can keep history
    pub fn derive(input: &str) -> bool {
        let (expr, point) = split_point(input);
        let f = match FunctionParser::parse_str(expr) {
            Err(e) => {
                println!("Parse err: {}", e);
                return false;
            }
            Ok(f) => f,
        };
        let df = f.derivative();
        println!("f(x)  = {}", f);
        println!("f'(x) = {}", df);
        match point.map(|p| p.parse::<f64>().map_err(|_| p)) {
            None => (),
            Some(Err(p)) => println!("Bad point: {:?}", p),
            Some(Ok(x)) => {
                println!("f({})  = {}", x, f.eval(x));
                println!("f'({}) = {}", x, df.eval(x));
            }
        }
        true
    }

}

fn main() -> Result<(), String> {
    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        repl::derive(input.as_str());
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    loop {
        match rl.readline("d> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                if repl::derive(line.as_str()) {
                    let _ = rl.add_history_entry(&line);
                }
            }
        }
    }
}
