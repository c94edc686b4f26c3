use std::io::Write;
use std::path::Path;
use std::process::Command;

use kyber_bench_utils::Error;
use kyber_bench_utils::analysis::collect::analyze_file;
use tempfile::NamedTempFile;

const DUMP: &str = "\
kyber.o:     file format elf64-x86-64


Disassembly of section .text:

0000000000000000 <poly_ntt>:
   0:\tc5 f5 6f 07          \tvmovdqa (%rdi),%ymm0
   4:\tc5 f5 f9 c1          \tvpsubw %ymm1,%ymm0,%ymm0
   8:\tc5 f5 f9 c2          \tvpaddw %ymm1,%ymm0,%ymm0
   c:\tc5 f8 58 c1          \tvaddps %xmm1,%xmm0,%xmm0
  10:\t66 0f 57 c0          \tpxor   %xmm0,%xmm0
  14:\t48 89 c7             \tmov    %rax,%rdi
  17:\tc3                   \tret
";

fn dump_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn analyze_listing_file() {
    let file = dump_file(DUMP);
    let output = analyze_file(file.path()).unwrap();
    // kyber, vmovdqa, vpsubw, vpaddw, vaddps, pxor, mov, ret
    assert_eq!(output.total, 8);
    // vmovdqa and vpsubw are not in the table
    assert_eq!(output.simd, 3);
    assert!(output.simd <= output.total);
    assert_eq!(output.lines_scanned, 13);
}

#[test]
fn missing_file_is_an_open_error() {
    let err = analyze_file(Path::new("/no/such/dump.txt")).unwrap_err();
    assert!(matches!(err, Error::Open { .. }));
}

#[test]
fn binary_prints_exact_report() {
    let file = dump_file(DUMP);
    let out = Command::new(env!("CARGO_BIN_EXE_analyze_simd"))
        .arg(file.path())
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "Successfully opened object dump. Investigating...\n\
         The result is:\n\
         3 SIMD instructions\n\
         8 Total instructions\n"
    );
}

#[test]
fn binary_output_is_repeatable() {
    let file = dump_file(DUMP);
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_analyze_simd"))
            .arg(file.path())
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn binary_fails_without_report() {
    let out = Command::new(env!("CARGO_BIN_EXE_analyze_simd"))
        .arg("/no/such/dump.txt")
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("failed to open"));

    let out = Command::new(env!("CARGO_BIN_EXE_analyze_simd"))
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn binary_lists_instruction_sets() {
    let out = Command::new(env!("CARGO_BIN_EXE_analyze_simd"))
        .arg("--info")
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("AVX2"));
    assert!(stdout.contains("254 mnemonics in total"));
}
