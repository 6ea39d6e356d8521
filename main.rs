use std::io::Write;

use clap::Parser;
use cp_library::segtree_lazy::SumSegTree;

mod fast_io {
    use std::io::{BufReader, BufWriter, Read, Stdout};
    use std::str::{from_utf8, FromStr};

    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum InputError {
        #[error("failed to read input")]
        Io(#[from] std::io::Error),

        #[error("unexpected end of input")]
        UnexpectedEof,

        #[error("cannot parse token {token:?}")]
        Parse { token: String },

        #[error("unknown command {0}")]
        UnknownCommand(u8),

        #[error(transparent)]
        Range(#[from] cp_library::error::Error),
    }

    pub trait InputStream {
        fn token(&mut self) -> Option<&[u8]>;

        fn value<T: FromStr>(&mut self) -> Result<T, InputError> {
            let token = self.token().ok_or(InputError::UnexpectedEof)?;
            from_utf8(token)
                .ok()
                .and_then(|s| s.parse::<T>().ok())
                .ok_or_else(|| InputError::Parse {
                    token: String::from_utf8_lossy(token).into_owned(),
                })
        }
    }

    // cheap whitespace check, control bytes count as blanks
    fn is_whitespace(c: u8) -> bool {
        c <= b' '
    }

    pub struct InputAtOnce {
        buf: Box<[u8]>,
        cursor: usize,
    }

    impl InputAtOnce {
        pub fn new(buf: Box<[u8]>) -> Self {
            Self { buf, cursor: 0 }
        }

        fn take(&mut self, n: usize) -> &[u8] {
            let n = n.min(self.buf.len() - self.cursor);
            let slice = &self.buf[self.cursor..self.cursor + n];
            self.cursor += n;
            slice
        }
    }

    impl InputStream for InputAtOnce {
        fn token(&mut self) -> Option<&[u8]> {
            let skip = self.buf[self.cursor..]
                .iter()
                .position(|&c| !is_whitespace(c))?;
            self.cursor += skip;
            let len = self.buf[self.cursor..]
                .iter()
                .position(|&c| is_whitespace(c))
                .unwrap_or(self.buf.len() - self.cursor);
            Some(self.take(len))
        }
    }

    pub fn stdin_at_once() -> Result<InputAtOnce, InputError> {
        let mut reader = BufReader::new(std::io::stdin().lock());
        let mut buf: Vec<u8> = vec![];
        reader.read_to_end(&mut buf)?;
        Ok(InputAtOnce::new(buf.into_boxed_slice()))
    }

    pub fn stdout_buf() -> BufWriter<Stdout> {
        BufWriter::new(std::io::stdout())
    }
}

use fast_io::{InputError, InputStream};

/// Range add, range sum over an integer array read from stdin.
///
/// Input: `n m k`, then `n` values, then `m + k` commands: `1 b c d` adds `d`
/// to every element of `[b, c]`, `2 b c` prints the sum of `[b, c]`.
#[derive(Parser, Debug)]
#[clap(version)]
struct Args {
    /// Indices in the commands start at 1 (the default).
    #[clap(long, overrides_with = "zero_based")]
    one_based: bool,

    /// Indices in the commands start at 0 instead of 1.
    #[clap(long, overrides_with = "one_based")]
    zero_based: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[clap(short, long)]
    verbose: bool,
}

impl Args {
    fn base(&self) -> usize {
        if self.zero_based && !self.one_based {
            0
        } else {
            1
        }
    }
}

fn solve(
    input: &mut impl InputStream,
    output: &mut impl Write,
    base: usize,
) -> Result<(), InputError> {
    let n: usize = input.value()?;
    let m: usize = input.value()?;
    let k: usize = input.value()?;
    let xs = (0..n)
        .map(|_| input.value::<i64>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut segtree = if xs.is_empty() {
        SumSegTree::create(0, 0, 0, 0)
    } else {
        SumSegTree::create_from_array(&xs, 0, 0)
    };
    log::debug!("{n} elements, {} commands", m + k);

    let index = |i: usize| {
        i.checked_sub(base)
            .ok_or(cp_library::error::Error::IndexOutOfBounds { index: i, len: n })
    };

    for _ in 0..m + k {
        let a: u8 = input.value()?;
        let b = index(input.value()?)?;
        let c = index(input.value()?)?;
        match a {
            1 => {
                let d: i64 = input.value()?;
                log::trace!("add {d} to [{b}, {c}]");
                segtree.try_update(b, c, d)?;
            }
            2 => {
                let sum = segtree.try_query(b, c)?;
                log::trace!("sum of [{b}, {c}] = {sum}");
                writeln!(output, "{}", sum)?;
            }
            _ => return Err(InputError::UnknownCommand(a)),
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let base = args.base();
    let result = fast_io::stdin_at_once().and_then(|mut input| {
        let mut output = fast_io::stdout_buf();
        solve(&mut input, &mut output, base)?;
        output.flush()?;
        Ok(())
    });

    if let Err(err) = result {
        log::error!("{err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
