//! Shared fixture corpus for store tests.
//!
//! Three movies; `SAM` appears in two of them; character 15 has no name;
//! movie 3 has an unparsable year and movie 2 unparsable vote count.
//!
//! Derived totals: RICK 4, ILSA 3, RIPLEY 2, SAM(12) 1, DALLAS 1, #15 1,
//! SAM(16) 1, JILL 0.

#![allow(dead_code)]

use dialogue_db::{CorpusStore, MemoryTableStore, Table};

pub const MOVIES: &str = "\
movie_id,title,year,imdb_rating,imdb_votes,raw_script_url
1,casablanca,1942,8.5,500000,http://scripts.example/casablanca.txt
2,alien,1979,8.4,abc,
3,brazil, n/a ,7.9,,
";

pub const CHARACTERS: &str = "\
character_id,name,movie_id,gender,age
10,RICK,1,M,
11,ILSA,1,F,
12,SAM,1,M,
13,RIPLEY,2,F,
14,DALLAS,2,M,
15,,2,,
16,SAM,3,,
17,JILL,3,F,
";

pub const CONVERSATIONS: &str = "\
conversation_id,character1_id,character2_id,movie_id
100,10,11,1
101,10,12,1
102,11,10,1
103,13,14,2
104,16,17,3
105,13,15,2
";

pub const LINES: &str = "\
line_id,character_id,movie_id,conversation_id,line_sort,line_text
1000,10,1,100,0,Of all the gin joints
1001,11,1,100,1,Play it once Sam
1002,10,1,100,2,Here's looking at you
1003,12,1,101,1,You want me to play it?
1004,10,1,101,0,\"Sam, play it\"
1005,11,1,102,0,Kiss me
1006,10,1,102,1,Louie
1007,11,1,102,2,Goodbye
1008,13,2,103,0,Get away from her
1009,14,2,103,1,Hold on
1010,16,3,104,0,Hi
1011,15,2,105,0,...
1012,13,2,105,1,Who's there
";

pub fn fixture_tables() -> MemoryTableStore {
    MemoryTableStore::new()
        .with_table(Table::Movies, MOVIES)
        .with_table(Table::Characters, CHARACTERS)
        .with_table(Table::Conversations, CONVERSATIONS)
        .with_table(Table::Lines, LINES)
}

pub fn fixture_store() -> (CorpusStore, MemoryTableStore) {
    let tables = fixture_tables();
    let store = CorpusStore::load(&tables).expect("fixture loads");
    (store, tables)
}

pub fn write_fixture_dir(dir: &std::path::Path) {
    for (table, contents) in [
        (Table::Movies, MOVIES),
        (Table::Characters, CHARACTERS),
        (Table::Conversations, CONVERSATIONS),
        (Table::Lines, LINES),
    ] {
        std::fs::write(dir.join(table.file_name()), contents).expect("write fixture table");
    }
}

/// Every derived counter agrees with the attributable line rows.
pub fn assert_counts_consistent(store: &CorpusStore) {
    for conversation in store.conversations().values() {
        assert_eq!(
            conversation.character1_lines + conversation.character2_lines,
            conversation.line_count,
            "conversation {}",
            conversation.id
        );
    }

    for character in store.characters().values() {
        let per_conversation: i64 = store
            .conversations_of(character.id)
            .iter()
            .filter_map(|id| store.conversation(*id))
            .map(|conversation| conversation.lines_by(character.id))
            .sum();
        assert_eq!(per_conversation, character.lines, "character {}", character.id);
    }
}
