use criterion::{criterion_group, criterion_main};


criterion_group!(
    benches,
    command::bench_parse_command_line,
    command::bench_find_command,
    engine::bench_execute_command,
    engine::bench_process_input,
    engine::bench_help
);
criterion_main!(benches);
