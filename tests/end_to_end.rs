use std::io::Cursor;

use brainfold::compiler::compiler::compile;
use brainfold::compiler::CompileError;
use brainfold::interpreter::{executor::Executor, Runtime};

fn interpret(source: &str, input: &[u8]) -> Vec<u8> {
    let program = compile(source.as_bytes()).unwrap();
    let mut in_stream = Cursor::new(input.to_vec());
    let mut out_stream = vec![];
    let mut runtime = Runtime::new(&mut in_stream, &mut out_stream);
    Executor::new().run(&mut runtime, &program).unwrap();
    drop(runtime);
    out_stream
}

#[test]
fn hello_world() {
    let source = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]\
                  >>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";
    assert_eq!(interpret(source, b""), b"Hello World!\n");
}

#[test]
fn echo_until_zero_byte() {
    // `,[.,]` copies input to output until it reads a zero byte
    assert_eq!(interpret(",[.,]", b"echo\0ignored"), b"echo");
}

#[test]
fn multiply_by_looping() {
    // 3 * 2 via a decrement-count loop, printed from cell 1
    assert_eq!(interpret("+++[>++<-]>.", b""), vec![6]);
}

#[test]
fn unbalanced_program_does_not_compile() {
    assert_eq!(
        compile(b"++[>+<").unwrap_err(),
        CompileError::UnmatchedLoopStart
    );
}
