const EXAMPLES: &str = r#"EXAMPLES:

1) Upload and download throughput by file size:

    Storage is configured in transfer-bench.toml, with TRANSFER_BENCH_ prefixed
    variables (e.g. TRANSFER_BENCH_STORAGE__BUCKET) or with the plain
    S3_BUCKET_NAME, S3_ENDPOINT_URL, AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY
    variables, which may also be placed in a .env file.

    $ cargo r --bin transfer-bench -r -- upload --sizes 100,500,1024
    $ cargo r --bin transfer-bench -r -- download --sizes 100,500,1024

    Download expects the objects created by the upload sweep (example_{size}mb.txt).

2) Custom transfer configuration:

    Files at or above 16 MiB are moved in 8 MiB parts, 20 parts in flight:

    $ cargo r --bin transfer-bench -r -- upload --multipart-threshold 16MiB --multipart-chunksize 8MiB --max-concurrency 20

3) Multipart tuning:

    Downloads a 1024 MB object with every combination of the given values
    (3 x 3 x 2 x 1 = 18 runs) and saves the fastest configuration:

    $ cargo r --bin transfer-bench -r -- tune --direction download --size 1024 --thresholds 8MiB,16MiB,50MiB --concurrencies 5,10,20 --chunksizes 8MiB,16MiB --use-threads true

4) Results location:

    $ cargo r --bin transfer-bench -r -- --output-dir results --identifier lab-1 --remark no-cache tune

    A failing transfer is recorded as a failed run and the sweep continues,
    use --fail-fast to stop at the first failure instead.

5) Other options:

    $ cargo r --bin transfer-bench -r -- --help
    $ cargo r --bin transfer-bench -r -- upload --help
    $ cargo r --bin transfer-bench -r -- tune --help

"#;

pub fn print_examples() {
    print!("{}", EXAMPLES)
}
