use geostage::GeostageError;

pub fn format_error(err: &anyhow::Error) -> String {
    if let Some(geostage) = err.downcast_ref::<GeostageError>() {
        return format_geostage_error(geostage);
    }

    format!("[ERROR] {}\n", err)
}

fn format_geostage_error(err: &GeostageError) -> String {
    let fix = match err {
        GeostageError::ConfigParse { .. } => {
            Some("Check the TOML syntax and value types in the config file.")
        }
        GeostageError::ConfigNotFound { .. } => {
            Some("Pass an existing file to --config, or omit it to use ./geostage.toml.")
        }
        GeostageError::Script(_) => Some(
            "Commands are: activate <location>, deactivate <location>, focus <location>, show <layer>, hide <layer>.",
        ),
        _ => None,
    };

    match fix {
        Some(fix) => format!("[ERROR] {}\n  → Fix: {}\n", err, fix),
        None => format!("[ERROR] {}\n", err),
    }
}
