//! Performance benchmarks for the latency logger
//!
//! The per-sample path (parse, sanitize, format) runs once per probe and the
//! summary once per run; both should stay far below a millisecond even for
//! long captures.

use chrono::Local;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use latency_logger::{
    extract_rtt_ms,
    output::{OutputFormatter, PlainFormatter},
    recorder::sanitize_raw,
    stats::summarize,
    Sample,
};

const LINUX_OUTPUT: &str = "PING 8.8.8.8 (8.8.8.8) 56(84) bytes of data.\n\
64 bytes from 8.8.8.8: icmp_seq=1 ttl=117 time=12.3 ms\n\n\
--- 8.8.8.8 ping statistics ---\n\
1 packets transmitted, 1 received, 0% packet loss, time 0ms\n\
rtt min/avg/max/mdev = 12.300/12.300/12.300/0.000 ms\n";

const WINDOWS_OUTPUT: &str = "\r\nPinging 8.8.8.8 with 32 bytes of data:\r\n\
Reply from 8.8.8.8: bytes=32 time<1ms TTL=117\r\n\r\n\
Ping statistics for 8.8.8.8:\r\n    Packets: Sent = 1, Received = 1, Lost = 0 (0% loss),\r\n";

const TIMEOUT_OUTPUT: &str = "PING 10.255.255.1 (10.255.255.1) 56(84) bytes of data.\n\n\
--- 10.255.255.1 ping statistics ---\n\
1 packets transmitted, 0 received, 100% packet loss, time 0ms\n";

fn bench_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_rtt_ms");
    for (name, output) in [
        ("linux", LINUX_OUTPUT),
        ("windows", WINDOWS_OUTPUT),
        ("timeout", TIMEOUT_OUTPUT),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), output, |b, output| {
            b.iter(|| extract_rtt_ms(black_box(output)))
        });
    }
    group.finish();
}

fn bench_sample_path(c: &mut Criterion) {
    let formatter = PlainFormatter::new();
    let now = Local::now();
    let long_output = LINUX_OUTPUT.repeat(20);

    c.bench_function("sanitize_raw_long", |b| {
        b.iter(|| sanitize_raw(black_box(&long_output)))
    });

    c.bench_function("sample_to_console_line", |b| {
        b.iter(|| {
            let rtt = extract_rtt_ms(LINUX_OUTPUT);
            let sample = Sample::from_probe(now, "8.8.8.8", true, rtt, black_box(LINUX_OUTPUT));
            formatter.format_sample_line(&sample)
        })
    });
}

fn bench_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");
    for size in [10usize, 1_000, 86_400] {
        let rtts: Vec<f64> = (0..size).map(|i| 5.0 + (i % 97) as f64 * 0.37).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &rtts, |b, rtts| {
            b.iter(|| summarize(black_box(rtts)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parser, bench_sample_path, bench_summary);
criterion_main!(benches);
