#![doc = include_str!("../README.md")]

mod cursor;
mod error;
mod outcome;
mod producer;
mod sequence;

pub use cursor::*;
pub use error::*;
pub use outcome::*;
pub use producer::*;
pub use sequence::*;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rusqlite::{params, Connection, OptionalExtension};

    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    struct Movie {
        pub title: String,
        pub year: u32,
    }

    /// Pages through the `movie` table one row per step. The connection is
    /// owned by the producer and goes away with the cursor.
    struct Movies {
        conn: Connection,
        table: &'static str,
        offset: i64,
    }

    impl Producer for Movies {
        type Item = Movie;
        type Error = rusqlite::Error;

        fn compute_next(&mut self) -> std::result::Result<Outcome<Movie>, Self::Error> {
            let movie = self
                .conn
                .query_row(
                    &format!(
                        "select title, year from {} order by id limit 1 offset $1",
                        self.table
                    ),
                    [self.offset],
                    |row| {
                        Ok(Movie {
                            title: row.get(0)?,
                            year: row.get(1)?,
                        })
                    },
                )
                .optional()?;

            self.offset += 1;

            Ok(movie.into())
        }
    }

    fn movie_db() -> std::result::Result<Connection, rusqlite::Error> {
        let conn = Connection::open(":memory:")?;

        conn.execute(
            r#"
                create table if not exists movie (
                    id integer primary key,
                    title text not null unique,
                    year integer not null
                );
            "#,
            (),
        )?;

        for (title, year) in [("Inception", 2010), ("The Social Network", 2010)] {
            conn.execute(
                "
                    insert into movie (title, year) values ($1, $2)
                ",
                params![title, year],
            )?;
        }

        Ok(conn)
    }

    #[test]
    fn cursor_pages_through_rows() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let mut movies = Cursor::new(Movies {
            conn: movie_db()?,
            table: "movie",
            offset: 0,
        });

        assert_eq!(
            movies.peek()?,
            Some(&Movie {
                title: "Inception".into(),
                year: 2010
            })
        );
        assert_eq!(
            movies.take_next()?,
            Movie {
                title: "Inception".into(),
                year: 2010
            }
        );
        assert_eq!(
            movies.take_next()?,
            Movie {
                title: "The Social Network".into(),
                year: 2010
            }
        );
        assert!(!movies.has_more()?);
        assert_eq!(movies.get_ref().offset, 3);

        Ok(())
    }

    #[test]
    fn query_failure_poisons_the_cursor() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let mut movies = Cursor::new(Movies {
            conn: movie_db()?,
            table: "film",
            offset: 0,
        });

        assert!(matches!(
            movies.has_more(),
            Err(Error::Producer(rusqlite::Error::SqliteFailure(..)))
        ));
        assert!(matches!(movies.take_next(), Err(Error::IllegalState)));
        assert_eq!(movies.get_ref().offset, 0);

        Ok(())
    }
}
