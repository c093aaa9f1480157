use std::process::Command;

use assert_cmd::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tempfile::TempDir;

fn envboot() -> Command {
    let mut cmd = Command::cargo_bin("envboot").expect("failed to locate envboot binary");
    cmd.env_clear();
    cmd
}

fn write_base_config(dir: &TempDir) -> String {
    let path = dir.path().join("app.yaml");
    std::fs::write(
        &path,
        "akka:\n  loglevel: INFO\n  cluster:\n    seed-nodes: []\n",
    )
    .expect("failed to write base config");
    path.to_str().expect("temp path is not UTF-8").to_string()
}

fn bench_cli_startup(c: &mut Criterion) {
    c.bench_function("cli_startup_version", |b| {
        b.iter(|| {
            let output = envboot().arg("--version").output().expect("failed to run envboot");
            black_box(output);
        });
    });
}

fn bench_cli_render(c: &mut Criterion) {
    c.bench_function("cli_render", |b| {
        b.iter_batched(
            || {
                let dir = TempDir::new().expect("failed to create temp dir");
                let config = write_base_config(&dir);
                (dir, config)
            },
            |(_dir, config)| {
                let output = envboot()
                    .env("CLUSTER_IP", "10.0.0.1")
                    .env("CLUSTER_PORT", "4053")
                    .env("CLUSTER_SEEDS", "akka.tcp://Sys@a:4053, akka.tcp://Sys@b:4053")
                    .args(["--config", &config, "--quiet", "render", "--format", "json"])
                    .output()
                    .expect("failed to execute envboot render");

                black_box(output);
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_cli_tokenize(c: &mut Criterion) {
    c.bench_function("cli_tokenize", |b| {
        b.iter(|| {
            let output = envboot()
                .args(["tokenize", r#"["a", "b", "c"]"#])
                .output()
                .expect("failed to execute envboot tokenize");
            black_box(output);
        });
    });
}

criterion_group!(
    cli_benches,
    bench_cli_startup,
    bench_cli_render,
    bench_cli_tokenize
);
criterion_main!(cli_benches);
