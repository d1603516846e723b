use trivia_client::{
    CellKey, DEFAULT_API_URL, GameParams, JServiceClient, LoadingView, TriviaGame,
};

/// Loading view that narrates the load on stdout.
struct ConsoleView;

impl LoadingView for ConsoleView {
    fn enter_loading(&mut self) {
        println!("Loading board...");
    }

    fn exit_loading(&mut self) {
        println!("Loading finished");
    }
}

#[tokio::main]
async fn main() -> trivia_client::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let source = JServiceClient::new(DEFAULT_API_URL)?;
    let mut game =
        TriviaGame::new(source, GameParams::default()).with_loading_view(Box::new(ConsoleView));

    // Fetch a fresh 6x5 board
    game.start().await?;
    display_board(&game);

    // Walk the top-left cell through its lifecycle
    let key = CellKey::new(0, 0);

    println!("\nClicking {key} once (question)...");
    game.click(key);
    display_board(&game);

    println!("\nClicking {key} again (answer)...");
    game.click(key);
    display_board(&game);

    println!("\nClicking {key} a third time (spent, nothing changes)...");
    game.click(key);
    display_board(&game);

    // Restart: a completely new board replaces the old one
    println!("\nRestarting...");
    game.start().await?;
    display_board(&game);

    Ok(())
}

fn display_board(game: &TriviaGame<JServiceClient>) {
    let Some(board) = game.board() else {
        println!("(no board)");
        return;
    };

    println!("Board state:");
    for (index, category) in board.categories.iter().enumerate() {
        println!("[{index}] {}", category.title);
        for (row, clue) in category.clues.iter().enumerate() {
            println!("    {index}-{row}: {}", clue.display_text());
        }
    }
}
