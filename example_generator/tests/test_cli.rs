#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::process::Command;

    use workspace_root::get_workspace_root;

    fn testdata(filename: &str) -> PathBuf {
        let mut path = get_workspace_root();
        path.push("testdata");
        path.push(filename);
        path
    }

    #[test]
    fn prints_generated_xml_to_stdout() {
        let output = Command::new(env!("CARGO_BIN_EXE_examplegen"))
            .arg(testdata("pet.xsd"))
            .arg("pet")
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.contains("<pet>"));
        assert!(stdout.contains("</pet>"));
    }

    #[test]
    fn missing_schema_fails_with_stderr_message_only() {
        let output = Command::new(env!("CARGO_BIN_EXE_examplegen"))
            .arg(testdata("no-such-schema.xsd"))
            .arg("pet")
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains("failed to read schema file"));
    }
}
