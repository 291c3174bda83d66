pub mod u101_book_session;
