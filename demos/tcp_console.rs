//! Telnet-style console served over TCP.
//!
//! Run with `cargo run --example tcp_console --features std`, then connect
//! with `telnet localhost 2323` or `nc localhost 2323`. One client is served
//! at a time. A single engine serves every client: each accepted socket is
//! swapped in as its transport and the session is reset.

use std::io;
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::time::{Duration, Instant};

use mcli::command::{CommandArgs, CommandDefinition};
use mcli::engine::Engine;
use mcli::io::ByteStream;
use mcli::io::std_io::StdIo;

const LISTEN_ADDRESS: &str = "0.0.0.0:2323";
const POLL_INTERVAL: Duration = Duration::from_millis(10);

struct AppContext {
    started: Instant,
    connected_at: Instant,
    peer: Option<SocketAddr>,
    sessions: u32,
}

impl AppContext {
    fn begin_session(&mut self, peer: SocketAddr) {
        self.peer = Some(peer);
        self.connected_at = Instant::now();
        self.sessions += 1;
    }
}

fn cmd_hello(_args: &CommandArgs, _ctx: &mut AppContext, io: &mut dyn ByteStream) {
    io.println("Hello via TCP!");
}

fn cmd_status(_args: &CommandArgs, ctx: &mut AppContext, io: &mut dyn ByteStream) {
    io.println("System Status: OK");
    match ctx.peer {
        Some(peer) => io.print_fmt(format_args!("Client: {}\r\n", peer)),
        None => io.println("Client: unknown"),
    }
    io.print_fmt(format_args!("Sessions served: {}\r\n", ctx.sessions));
}

fn cmd_uptime(args: &CommandArgs, ctx: &mut AppContext, io: &mut dyn ByteStream) {
    if args.get(1) == Some("session") {
        let seconds = ctx.connected_at.elapsed().as_secs();
        io.print_fmt(format_args!("Session uptime: {} seconds\r\n", seconds));
    } else {
        let seconds = ctx.started.elapsed().as_secs();
        io.print_fmt(format_args!("Uptime: {} seconds\r\n", seconds));
    }
}

static COMMANDS: [CommandDefinition<AppContext>; 3] = [
    CommandDefinition::new("hello", cmd_hello, "Say hello"),
    CommandDefinition::new("status", cmd_status, "Show system status"),
    CommandDefinition::new("uptime", cmd_uptime, "Show uptime [session]"),
];

/// Wait for the next client and prepare its socket for polling.
fn next_client(listener: &TcpListener) -> StdIo<TcpStream> {
    loop {
        let stream = match listener.accept() {
            Ok((stream, _)) => stream,
            Err(err) => {
                eprintln!("accept failed: {}", err);
                continue;
            }
        };
        // The read timeout doubles as the poll interval: a peek waits at
        // most this long for the next keystroke.
        let configured = stream
            .set_read_timeout(Some(POLL_INTERVAL))
            .and_then(|()| stream.set_nodelay(true));
        match configured {
            Ok(()) => return StdIo::new(stream),
            Err(err) => eprintln!("dropping client: {}", err),
        }
    }
}

fn main() -> io::Result<()> {
    let listener = TcpListener::bind(LISTEN_ADDRESS)?;
    println!("listening on {}", listener.local_addr()?);

    let now = Instant::now();
    let mut ctx = AppContext {
        started: now,
        connected_at: now,
        peer: None,
        sessions: 0,
    };

    let mut cli = Engine::new(next_client(&listener), &mut ctx);
    cli.register_commands(&COMMANDS);

    loop {
        if let Ok(peer) = cli.io().get_ref().peer_addr() {
            cli.context_mut().begin_session(peer);
            println!("client connected: {}", peer);
        }
        cli.welcome(&["=== TCP CLI ===", "Type 'help' for available commands"]);

        while cli.io().is_connected() {
            cli.process_input();
        }

        match cli.io().last_error() {
            Some(err) => println!("client left: {}", err),
            None => println!("client left"),
        }

        *cli.io_mut() = next_client(&listener);
        cli.reset_session();
    }
}
