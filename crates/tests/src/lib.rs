//! # Integration Tests
//!
//! 集成测试与端到端测试。
//!
//! 负责：
//! - 合约快照测试 (词表与边界常量)
//! - 端到端管道测试（文件 → 载入 → 校验/分发 → 报告）
//! - 分发延迟使用 `RecordingDelay`，不占用真实时间

#[cfg(test)]
mod contract_tests {
    use contracts::{IpcCommand, IpcType, IPC_TIMEOUT, MAX_IPC_SIZE};
    use std::time::Duration;

    #[test]
    fn test_vocabulary_snapshot() {
        let types: Vec<_> = IpcType::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(
            types,
            vec![
                "SOF_IPC_COMP_SET_VALUE",
                "SOF_IPC_COMP_GET_VALUE",
                "SOF_IPC_COMP_GET_DATA",
                "SOF_IPC_COMP_SET_DATA",
                "SOF_IPC_COMP_NOTIFICATION",
            ]
        );

        let cmds: Vec<_> = IpcCommand::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            cmds,
            vec![
                "SOF_CTRL_CMD_VOLUME",
                "SOF_CTRL_CMD_ENUM",
                "SOF_CTRL_CMD_SWITCH",
                "SOF_CTRL_CMD_BINARY",
            ]
        );
    }

    #[test]
    fn test_bounds_snapshot() {
        assert_eq!(MAX_IPC_SIZE, 256);
        assert_eq!(IPC_TIMEOUT, Duration::from_micros(300));
    }
}

#[cfg(test)]
mod e2e_tests {
    use std::fs::File;
    use std::io::{BufReader, Write};

    use contracts::IPC_TIMEOUT;
    use dispatcher::{DspSimulator, MemorySink, RecordingDelay, StdoutSink};
    use ingestion::OrderPolicy;
    use ipc_parser::{CliError, OutputFormat, Pipeline, PipelineConfig, RunReport};

    const SAMPLE: &str = "\
SOF_IPC_COMP_SET_VALUE SOF_CTRL_CMD_VOLUME 128
SOF_IPC_COMP_GET_VALUE SOF_CTRL_CMD_ENUM 0
SOF_IPC_COMP_GET_DATA SOF_CTRL_CMD_SWITCH 257
SOF_IPC_COMP_SET_DATA SOF_CTRL_CMD_BINARY 256
SOF_IPC_COMP_NOTIFICATION SOF_CTRL_CMD_VOLUME -3
sof_ipc_comp_set_value SOF_CTRL_CMD_VOLUME 10
SOF_IPC_COMP_NOTIFICATION SOF_CTRL_CMD_MUTE 10
SOF_IPC_COMP_NOTIFICATION SOF_CTRL_CMD_SWITCH 64
";

    fn write_input(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    struct RunOutput {
        result: Result<RunReport, CliError>,
        stdout: String,
        commands: Vec<String>,
        waited: std::time::Duration,
    }

    fn run_file(content: &str, config: PipelineConfig) -> RunOutput {
        let file = write_input(content);
        let reader = BufReader::new(File::open(file.path()).unwrap());

        let simulator = DspSimulator::new(RecordingDelay::new(), MemorySink::new("mem"));
        let mut pipeline = Pipeline::new(config, simulator, Vec::new());
        let result = pipeline.run(reader);

        let (simulator, out) = pipeline.into_parts();
        let (delay, sink) = simulator.into_parts();
        RunOutput {
            result,
            stdout: String::from_utf8(out).unwrap(),
            commands: sink.commands().to_vec(),
            waited: delay.total(),
        }
    }

    /// 端到端：文件 → Pipeline → 报告
    #[test]
    fn test_e2e_mixed_file() {
        let run = run_file(SAMPLE, PipelineConfig::default());
        let report = run.result.unwrap();

        assert_eq!(report.valid_messages, 4);
        assert_eq!(report.invalid_messages, 4);
        assert_eq!(report.min_payload, Some(0));
        assert_eq!(report.max_payload, Some(256));
        assert!(report.dispatch_failures.is_empty());

        assert_eq!(
            run.commands,
            vec![
                "SOF_CTRL_CMD_VOLUME",
                "SOF_CTRL_CMD_ENUM",
                "SOF_CTRL_CMD_BINARY",
                "SOF_CTRL_CMD_SWITCH",
            ]
        );
        assert_eq!(run.waited, IPC_TIMEOUT * 4);

        let echo: Vec<_> = run.stdout.lines().skip(1).take(8).collect();
        let expected: Vec<_> = SAMPLE.lines().collect();
        assert_eq!(echo, expected);
        assert!(run.stdout.ends_with(
            "Report:\nValid Messages: 4 Invalid Messages: 4\nMax payload: 256 Min payload: 0\n"
        ));
    }

    #[test]
    fn test_e2e_empty_file() {
        let run = run_file("", PipelineConfig::default());
        let report = run.result.unwrap();
        assert_eq!(report.total(), 0);
        assert!(run.stdout.contains("No valid messages to measure payload"));
        assert!(run.commands.is_empty());
    }

    #[test]
    fn test_e2e_truncated_last_record() {
        let input = "SOF_IPC_COMP_SET_VALUE SOF_CTRL_CMD_VOLUME 128\n\
                     SOF_IPC_COMP_SET_VALUE SOF_CTRL_CMD_VOLUME\n";
        let run = run_file(input, PipelineConfig::default());

        let err = run.result.unwrap_err();
        assert_eq!(err.exit_code(), 255);
        assert!(run.stdout.is_empty(), "no report expected, got {:?}", run.stdout);
        assert!(run.commands.is_empty());
    }

    /// 超出 i64 的 size 饱和后按越界处理，不中断载入
    #[test]
    fn test_e2e_huge_size_counts_invalid() {
        let input = "SOF_IPC_COMP_SET_VALUE SOF_CTRL_CMD_VOLUME 99999999999999999999\n\
                     SOF_IPC_COMP_SET_VALUE SOF_CTRL_CMD_ENUM 64\n";
        let run = run_file(input, PipelineConfig::default());
        let report = run.result.unwrap();

        assert_eq!(report.valid_messages, 1);
        assert_eq!(report.invalid_messages, 1);
        assert_eq!(report.min_payload, Some(64));
        assert_eq!(report.max_payload, Some(64));
        assert_eq!(run.commands, vec!["SOF_CTRL_CMD_ENUM"]);
        assert!(run
            .stdout
            .contains("SOF_IPC_COMP_SET_VALUE SOF_CTRL_CMD_VOLUME 9223372036854775807\n"));
    }

    #[test]
    fn test_e2e_long_name_counts_invalid() {
        let long_cmd = "X".repeat(600);
        let input = format!(
            "SOF_IPC_COMP_SET_VALUE {long_cmd} 16\n\
             SOF_IPC_COMP_SET_VALUE SOF_CTRL_CMD_SWITCH 8\n"
        );
        let run = run_file(&input, PipelineConfig::default());
        let report = run.result.unwrap();

        assert_eq!(report.valid_messages, 1);
        assert_eq!(report.invalid_messages, 1);
        assert_eq!(run.commands, vec!["SOF_CTRL_CMD_SWITCH"]);
    }

    #[test]
    fn test_e2e_legacy_order_matches_reversed_dispatch() {
        let config = PipelineConfig {
            order: OrderPolicy::Reversed,
            ..Default::default()
        };
        let run = run_file(SAMPLE, config);
        let report = run.result.unwrap();
        assert_eq!(report.valid_messages, 4);
        assert_eq!(
            run.commands,
            vec![
                "SOF_CTRL_CMD_SWITCH",
                "SOF_CTRL_CMD_BINARY",
                "SOF_CTRL_CMD_ENUM",
                "SOF_CTRL_CMD_VOLUME",
            ]
        );
    }

    #[test]
    fn test_e2e_json_report() {
        let config = PipelineConfig {
            output: OutputFormat::Json,
            ..Default::default()
        };
        let run = run_file(SAMPLE, config);
        run.result.unwrap();

        let json: serde_json::Value = serde_json::from_str(&run.stdout).unwrap();
        assert_eq!(json["valid_messages"], 4);
        assert_eq!(json["invalid_messages"], 4);
        assert_eq!(json["min_payload"], 0);
        assert_eq!(json["max_payload"], 256);
    }

    #[test]
    fn test_e2e_idempotent() {
        let first = run_file(SAMPLE, PipelineConfig::default());
        let second = run_file(SAMPLE, PipelineConfig::default());
        assert_eq!(first.result.unwrap(), second.result.unwrap());
        assert_eq!(first.stdout, second.stdout);
    }

    /// Dispatch notices written to the same stream interleave after the header
    #[test]
    fn test_e2e_stdout_sink_shares_stream() {
        let simulator = DspSimulator::new(
            RecordingDelay::new(),
            StdoutSink::with_writer("buf", Vec::new()),
        );
        let mut pipeline = Pipeline::new(PipelineConfig::default(), simulator, Vec::new());
        pipeline
            .run("SOF_IPC_COMP_SET_VALUE SOF_CTRL_CMD_VOLUME 1\n".as_bytes())
            .unwrap();

        let (simulator, _) = pipeline.into_parts();
        let (_, sink) = simulator.into_parts();
        let notices = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(notices, "IPC command received: SOF_CTRL_CMD_VOLUME\n");
    }
}
