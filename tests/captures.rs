use crate::util;

fn check(rows: &[(&str, &str, usize, &str)]) {
    util::run(rows, |&(haystack, pattern, number, text)| {
        let re = util::search(pattern, haystack)?;
        util::expect("capture", text, re.capture(number))
    });
}

#[test]
fn ascii() {
    check(ASCII);
}

#[test]
fn unicode() {
    check(UNICODE);
}

#[test]
fn totals() {
    util::run(TOTALS, |&(haystack, pattern, total)| {
        let re = util::search(pattern, haystack)?;
        util::expect("total", total, re.total_captures())?;
        util::expect("iterated", total, re.captures().count())
    });
}

#[test]
fn totals_long_haystack() {
    let haystack = "@".repeat(1024);
    let re = util::search("<:S>", &haystack).unwrap();
    assert_eq!(1024, re.total_captures());
    assert_eq!(1024, re.last_match_count());
    assert_eq!("@", re.capture(1024));
}

const ASCII: &[(&str, &str, usize, &str)] = &[
    ("a", "<a>", 1, "a"),
    ("aa", "<aa>", 1, "aa"),
    ("a a a", "<a>", 2, "a"),
    ("abcd", "<a|b|c|d>", 1, "a"),
    ("abcd", "<a|b|c|d>", 2, "b"),
    ("abcd", "<a|b|c|d>", 3, "c"),
    ("abcd", "<a|b|c|d>", 4, "d"),
    ("abcd", "<a|b|c|d>", 5, ""),
    ("abc", "a<x>", 1, ""),
    ("abc", "<a>x", 1, ""),
    ("abc", "<a|b>x", 1, ""),
    ("abc", "<<a|b>x|abc>", 1, "abc"),
    ("abc", "<<a|b>x|abc>", 2, ""),
    ("abc", "<x<a|b>|abc>", 1, "abc"),
    ("abc", "<x<a|b>|abc>", 2, ""),
    ("abc abc abc", "<a|b|c>", 9, "c"),
    ("abc abc abc", "<(a|b|c)(a|b|c)(a|b|c)>", 3, "abc"),
    ("abc abc abc", "<(a|b|c)(a|b|c)(a|b|c)> ", 2, "abc"),
    ("abc abc abc", "#?<(a|b|c)(a|b|c)(a|b|c)>", 1, "abc"),
    ("abc abc abc", "#?<(a|b|c)(a|b|c)((a|b)|x)>", 1, ""),
    ("abc abc abx", "#?<(a|b|c)(a|b|c)((a|b)|x)>", 1, "abx"),
    ("abc iecc oeb", "<<(a|e)|(i|o)>e<b|c>|abc>", 1, "abc"),
    ("abc iecc oeb", "<<(a|e)|(i|o)>e<b|c>|abc>", 2, "iec"),
    ("abc iecc oeb", "<<(a|e)|(i|o)>e<b|c>|abc>", 3, "i"),
    ("abc iecc oeb", "<<(a|e)|(i|o)>e<b|c>|abc>", 4, "c"),
    ("abc iecc oeb", "<<(a|e)|(i|o)>e<b|c>|abc>", 5, "oeb"),
    ("abc iecc oeb", "<<(a|e)|(i|o)>e<b|c>|abc>", 6, "o"),
    ("abc iecc oeb", "<<(a|e)|(i|o)>e<b|c>|abc>", 7, "b"),
    ("abc iecc oeb", "<<(a|e)|(i|o)>e<b|c>|abc>", 8, ""),
    ("A", "#$<.{5}>", 1, ""),
    ("AB", "#$<.{5}>", 1, ""),
    ("ABC", "#$<.{5}>", 1, ""),
    ("ABCD", "#$<.{5}>", 1, ""),
    ("ABCDE", "#$<.{5}>", 1, "ABCDE"),
    ("ABCDEF", "#$<.{5}>", 1, "BCDEF"),
    ("ABCDEFG", "#$<.{5}>", 1, "CDEFG"),
    ("ABCDEFGH", "#$<.{5}>", 1, "DEFGH"),
    ("ABCDEFGHI", "#$<.{5}>", 1, "EFGHI"),
    ("ABCDEFGHIJ", "#$<.{5}>", 1, "FGHIJ"),
    ("ABCDEFGHIJK", "#$<.{5}>", 1, "GHIJK"),
    ("ABCDEFGHIJKL", "#$<.{5}>", 1, "HIJKL"),
    ("ABCDEFGHIJKLM", "#$<.{5}>", 1, "IJKLM"),
    ("ABCDEFGHIJKLMN", "#$<.{5}>", 1, "JKLMN"),
    ("ABCDEFGHIJKLMNO", "#$<.{5}>", 1, "KLMNO"),
    ("ABCDEFGHIJKLMNOP", "#$<.{5}>", 1, "LMNOP"),
    ("ABCDEFGHIJKLMNOPQ", "#$<.{5}>", 1, "MNOPQ"),
    ("ABCDEFGHIJKLMNOPQR", "#$<.{5}>", 1, "NOPQR"),
    ("ABCDEFGHIJKLMNOPQRS", "#$<.{5}>", 1, "OPQRS"),
    ("ABCDEFGHIJKLMNOPQRST", "#$<.{5}>", 1, "PQRST"),
    ("ABCDEFGHIJKLMNOPQRSTU", "#$<.{5}>", 1, "QRSTU"),
    ("ABCDEFGHIJKLMNOPQRSTUV", "#$<.{5}>", 1, "RSTUV"),
    ("ABCDEFGHIJKLMNOPQRSTUVW", "#$<.{5}>", 1, "STUVW"),
    ("ABCDEFGHIJKLMNOPQRSTUVWX", "#$<.{5}>", 1, "TUVWX"),
    ("ABCDEFGHIJKLMNOPQRSTUVWXY", "#$<.{5}>", 1, "UVWXY"),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ", "#$<.{5}>", 1, "VWXYZ"),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ[", "#$<.{5}>", 1, "WXYZ["),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ][", "#$<.{5}>", 1, "XYZ]["),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ^][", "#$<.{5}>", 1, "YZ^]["),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_^][", "#$<.{5}>", 1, "Z_^]["),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][", "#$<.{5}>", 1, "_`^]["),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][a", "#$<.{5}>", 1, "`^][a"),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][ab", "#$<.{5}>", 1, "^][ab"),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abc", "#$<.{5}>", 1, "][abc"),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcd", "#$<.{5}>", 1, "[abcd"),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcde", "#$<.{5}>", 1, "abcde"),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdef", "#$<.{5}>", 1, "bcdef"),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefg", "#$<.{5}>", 1, "cdefg"),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefgh", "#$<.{5}>", 1, "defgh"),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghi", "#$<.{5}>", 1, "efghi"),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghij", "#$<.{5}>", 1, "fghij"),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijk", "#$<.{5}>", 1, "ghijk"),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijkl", "#$<.{5}>", 1, "hijkl"),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklm", "#$<.{5}>", 1, "ijklm"),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmn", "#$<.{5}>", 1, "jklmn"),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmno", "#$<.{5}>", 1, "klmno"),
    (
        "ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnop",
        "#$<.{5}>",
        1,
        "lmnop",
    ),
    (
        "ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnopq",
        "#$<.{5}>",
        1,
        "mnopq",
    ),
    (
        "ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnopqr",
        "#$<.{5}>",
        1,
        "nopqr",
    ),
    (
        "ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnopqrs",
        "#$<.{5}>",
        1,
        "opqrs",
    ),
    (
        "ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnopqrst",
        "#$<.{5}>",
        1,
        "pqrst",
    ),
    (
        "ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnopqrstu",
        "#$<.{5}>",
        1,
        "qrstu",
    ),
    (
        "ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnopqrstuv",
        "#$<.{5}>",
        1,
        "rstuv",
    ),
    (
        "ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnopqrstuvw",
        "#$<.{5}>",
        1,
        "stuvw",
    ),
    (
        "ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnopqrstuvwx",
        "#$<.{5}>",
        1,
        "tuvwx",
    ),
    (
        "ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnopqrstuvwxy",
        "#$<.{5}>",
        1,
        "uvwxy",
    ),
    (
        "ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnopqrstuvwxyz",
        "#$<.{5}>",
        1,
        "vwxyz",
    ),
    ("a", "<a>?", 1, "a"),
    ("a", "<b>?", 1, ""),
    ("a", "<a>+", 1, "a"),
    ("a", "<a>*", 1, "a"),
    ("a", "<b>*", 1, ""),
    ("aaa", "<a>+", 1, "aaa"),
    ("aaa", "<a>*", 1, "aaa"),
    ("aaa", "#~<a>+", 1, "aaa"),
    ("aaa", "#~<a>*", 1, "aaa"),
    ("aaab", "#~<a+>", 1, "aaa"),
    ("aaab", "#~<a*>", 1, "aaa"),
    ("aaab", "#~<a?>", 4, ""),
    ("aaab", "#~<a+b>", 1, "aaab"),
    ("aaab", "#~<a*b>", 1, "aaab"),
    ("aaab", "#~<a?b>", 1, "ab"),
    ("aaab", "#~<a+b?>", 1, "aaab"),
    ("aaab", "#~<a*b?>", 1, "aaab"),
    ("aaab", "#~<a?b?>", 3, "ab"),
    ("aaab", "#~<a+b+>", 1, "aaab"),
    ("aaab", "#~<a*b+>", 1, "aaab"),
    ("aaab", "#~<a?b+>", 1, "ab"),
    ("aaab", "#~<a+b*>", 1, "aaab"),
    ("aaab", "#~<a*b*>", 1, "aaab"),
    ("aaab", "#~<a?b*>", 3, "ab"),
    ("aaabaaa", "#~<a+>", 4, "aaa"),
    ("aaabaaa", "#~<a*>", 5, "aaa"),
    (
        "Raptor Test",
        "<((C|R)ap C|C|R)(a+p{1}tor) ?((<T|F>+e)(st))>",
        1,
        "Raptor Test",
    ),
    ("Raptor Test", "<((C|R)ap C|C|R)(a+p{1}tor) ?((<T|F>+e)(st))>", 2, "T"),
    (
        "Raaaaptor TFest",
        "<((C|R)ap C|C|R)(a+p{1}tor) ?((<T|F>+e)(st))>",
        1,
        "Raaaaptor TFest",
    ),
    (
        "Raaaaptor TFest",
        "<((C|R)ap C|C|R)(a+p{1}tor) ?((<T|F>+e)(st))>",
        2,
        "TF",
    ),
    (
        "CaptorTest",
        "<((C|R)ap C|C|R)(a+p{1}tor) ?((<T|F>+e)(st))>",
        1,
        "CaptorTest",
    ),
    (
        "Cap CaptorTest",
        "<((C|R)ap C|C|R)(a+p{1}tor) ?((<T|F>+e)(st))>",
        1,
        "Cap CaptorTest",
    ),
    (
        "Cap CaptorTest",
        "#~<((C|R)ap C|C|R)(a+p{1}tor) ?((<T|F>+e)(st))>",
        3,
        "CaptorTest",
    ),
    (
        "Rap Captor Fest",
        "<((C|R)ap C|C|R)(a+p{1}tor) ?((<T|F>+e)(st))>",
        1,
        "Rap Captor Fest",
    ),
    (
        "Rap Captor Fest",
        "#~<((C|R)ap C|C|R)(a+p{1}tor) ?((<T|F>+e)(st))>",
        3,
        "Captor Fest",
    ),
    (
        "012345678910109876501234",
        "<0><1><2><3><4><5><6><7><8><9><10><@11@10@9@8@7@6@1@2@3@4@5>",
        12,
        "109876501234",
    ),
    ("| | text", "#^$<:s*>", 1, ""),
];

const UNICODE: &[(&str, &str, usize, &str)] = &[
    ("▲", "<▲>", 1, "▲"),
    ("▲▲", "<▲▲>", 1, "▲▲"),
    ("▲ ▲ ▲", "<▲>", 3, "▲"),
    ("▲bcd", "<▲|b|c|d>", 1, "▲"),
    ("▲bcd", "<▲|b|c|d>", 2, "b"),
    ("▲bcd", "<▲|b|c|d>", 3, "c"),
    ("▲bcd", "<▲|b|c|d>", 4, "d"),
    ("▲bcd", "<▲|b|c|d>", 5, ""),
    ("▲bc", "▲<x>", 1, ""),
    ("▲bc", "<▲>x", 1, ""),
    ("▲bc", "<▲|b>x", 1, ""),
    ("▲bc", "<<▲|b>x|▲bc>", 1, "▲bc"),
    ("▲bc", "<<▲|b>x|▲bc>", 2, ""),
    ("▲bc", "<x<▲|b>|▲bc>", 1, "▲bc"),
    ("▲bc", "<x<▲|b>|▲bc>", 2, ""),
    ("▲bc ▲bc ▲bc", "<▲|b|c>", 9, "c"),
    ("▲bc ▲bc ▲bc", "<(▲|b|c)(▲|b|c)(▲|b|c)>", 3, "▲bc"),
    ("▲bc ▲bc ▲bc", "<(▲|b|c)(▲|b|c)(▲|b|c)> ", 2, "▲bc"),
    ("▲bc ▲bc ▲bc", "#?<(▲|b|c)(▲|b|c)(▲|b|c)>", 1, "▲bc"),
    ("▲bc ▲bc ▲bc", "#?<(▲|b|c)(▲|b|c)((▲|b)|x)>", 1, ""),
    ("▲bc ▲bc ▲bx", "#?<(▲|b|c)(▲|b|c)((▲|b)|x)>", 1, "▲bx"),
    ("▲bc iecc oeb", "<<(▲|e)|(i|o)>e<b|c>|▲bc>", 1, "▲bc"),
    ("▲bc iecc oeb", "<<(▲|e)|(i|o)>e<b|c>|▲bc>", 2, "iec"),
    ("▲bc iecc oeb", "<<(▲|e)|(i|o)>e<b|c>|▲bc>", 3, "i"),
    ("▲bc iecc oeb", "<<(▲|e)|(i|o)>e<b|c>|▲bc>", 4, "c"),
    ("▲bc iecc oeb", "<<(▲|e)|(i|o)>e<b|c>|▲bc>", 5, "oeb"),
    ("▲bc iecc oeb", "<<(▲|e)|(i|o)>e<b|c>|▲bc>", 6, "o"),
    ("▲bc iecc oeb", "<<(▲|e)|(i|o)>e<b|c>|▲bc>", 7, "b"),
    ("▲bc iecc oeb", "<<(▲|e)|(i|o)>e<b|c>|▲bc>", 8, ""),
    ("▲", "<▲>?", 1, "▲"),
    ("▲", "<b>?", 1, ""),
    ("▲", "<▲>+", 1, "▲"),
    ("▲", "<▲>*", 1, "▲"),
    ("▲", "<b>*", 1, ""),
    ("▲▲▲", "<▲>+", 1, "▲▲▲"),
    ("▲▲▲", "<▲>*", 1, "▲▲▲"),
    ("▲▲▲", "#~<▲>+", 1, "▲▲▲"),
    ("▲▲▲", "#~<▲>*", 1, "▲▲▲"),
    ("▲▲▲b", "#~<▲+>", 1, "▲▲▲"),
    ("▲▲▲b", "#~<▲*>", 1, "▲▲▲"),
    ("▲▲▲b", "#~<▲?>", 4, ""),
    ("▲▲▲b", "#~<▲+b>", 1, "▲▲▲b"),
    ("▲▲▲b", "#~<▲*b>", 1, "▲▲▲b"),
    ("▲▲▲b", "#~<▲?b>", 1, "▲b"),
    ("▲▲▲b", "#~<▲+b?>", 1, "▲▲▲b"),
    ("▲▲▲b", "#~<▲*b?>", 1, "▲▲▲b"),
    ("▲▲▲b", "#~<▲?b?>", 3, "▲b"),
    ("▲▲▲b", "#~<▲+b+>", 1, "▲▲▲b"),
    ("▲▲▲b", "#~<▲*b+>", 1, "▲▲▲b"),
    ("▲▲▲b", "#~<▲?b+>", 1, "▲b"),
    ("▲▲▲b", "#~<▲+b*>", 1, "▲▲▲b"),
    ("▲▲▲b", "#~<▲*b*>", 1, "▲▲▲b"),
    ("▲▲▲b", "#~<▲?b*>", 3, "▲b"),
    ("▲▲▲b▲▲▲", "#~<▲+>", 4, "▲▲▲"),
    ("▲▲▲b▲▲▲", "#~<▲*>", 5, "▲▲▲"),
    (
        "R▲ptor Test",
        "<((C|R)▲p C|C|R)(▲+p{1}tor) ?((<T|F>+e)(st))>",
        1,
        "R▲ptor Test",
    ),
    ("R▲ptor Test", "<((C|R)▲p C|C|R)(▲+p{1}tor) ?((<T|F>+e)(st))>", 2, "T"),
    (
        "R▲▲▲▲ptor TFest",
        "<((C|R)▲p C|C|R)(▲+p{1}tor) ?((<T|F>+e)(st))>",
        1,
        "R▲▲▲▲ptor TFest",
    ),
    (
        "R▲▲▲▲ptor TFest",
        "<((C|R)▲p C|C|R)(▲+p{1}tor) ?((<T|F>+e)(st))>",
        2,
        "TF",
    ),
    (
        "C▲ptorTest",
        "<((C|R)▲p C|C|R)(▲+p{1}tor) ?((<T|F>+e)(st))>",
        1,
        "C▲ptorTest",
    ),
    (
        "C▲p C▲ptorTest",
        "<((C|R)▲p C|C|R)(▲+p{1}tor) ?((<T|F>+e)(st))>",
        1,
        "C▲p C▲ptorTest",
    ),
    (
        "C▲p C▲ptorTest",
        "#~<((C|R)▲p C|C|R)(▲+p{1}tor) ?((<T|F>+e)(st))>",
        3,
        "C▲ptorTest",
    ),
    (
        "R▲p C▲ptor Fest",
        "<((C|R)▲p C|C|R)(▲+p{1}tor) ?((<T|F>+e)(st))>",
        1,
        "R▲p C▲ptor Fest",
    ),
    (
        "R▲p C▲ptor Fest",
        "#~<((C|R)▲p C|C|R)(▲+p{1}tor) ?((<T|F>+e)(st))>",
        3,
        "C▲ptor Fest",
    ),
    ("STARGΛ̊TE SG-1, a = v̇ = r̈, a⃑ ⊥ b⃑", "<:&>", 1, "Λ"),
    ("STARGΛ̊TE SG-1, a = v̇ = r̈, a⃑ ⊥ b⃑", "<:&>", 2, "̊"),
    ("STARGΛ̊TE SG-1, a = v̇ = r̈, a⃑ ⊥ b⃑", "<:&>", 3, "̇"),
    ("STARGΛ̊TE SG-1, a = v̇ = r̈, a⃑ ⊥ b⃑", "<:&>", 4, "̈"),
    ("STARGΛ̊TE SG-1, a = v̇ = r̈, a⃑ ⊥ b⃑", "<:&>", 5, "⃑"),
    ("STARGΛ̊TE SG-1, a = v̇ = r̈, a⃑ ⊥ b⃑", "<:&>", 6, "⊥"),
    ("STARGΛ̊TE SG-1, a = v̇ = r̈, a⃑ ⊥ b⃑", "<:&>", 7, "⃑"),
];

const TOTALS: &[(&str, &str, usize)] = &[
    ("A", "<.>", 1),
    ("AB", "<.>", 2),
    ("ABC", "<.>", 3),
    ("ABCD", "<.>", 4),
    ("ABCDE", "<.>", 5),
    ("ABCDEF", "<.>", 6),
    ("ABCDEFG", "<.>", 7),
    ("ABCDEFGH", "<.>", 8),
    ("ABCDEFGHI", "<.>", 9),
    ("ABCDEFGHIJ", "<.>", 10),
    ("ABCDEFGHIJK", "<.>", 11),
    ("ABCDEFGHIJKL", "<.>", 12),
    ("ABCDEFGHIJKLM", "<.>", 13),
    ("ABCDEFGHIJKLMN", "<.>", 14),
    ("ABCDEFGHIJKLMNO", "<.>", 15),
    ("ABCDEFGHIJKLMNOP", "<.>", 16),
    ("ABCDEFGHIJKLMNOPQ", "<.>", 17),
    ("ABCDEFGHIJKLMNOPQR", "<.>", 18),
    ("ABCDEFGHIJKLMNOPQRS", "<.>", 19),
    ("ABCDEFGHIJKLMNOPQRST", "<.>", 20),
    ("ABCDEFGHIJKLMNOPQRSTU", "<.>", 21),
    ("ABCDEFGHIJKLMNOPQRSTUV", "<.>", 22),
    ("ABCDEFGHIJKLMNOPQRSTUVW", "<.>", 23),
    ("ABCDEFGHIJKLMNOPQRSTUVWX", "<.>", 24),
    ("ABCDEFGHIJKLMNOPQRSTUVWXY", "<.>", 25),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ", "<.>", 26),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ[", "<.>", 27),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ][", "<.>", 28),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ^][", "<.>", 29),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_^][", "<.>", 30),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][", "<.>", 31),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][a", "<.>", 32),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][ab", "<.>", 33),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abc", "<.>", 34),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcd", "<.>", 35),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcde", "<.>", 36),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdef", "<.>", 37),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefg", "<.>", 38),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefgh", "<.>", 39),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghi", "<.>", 40),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghij", "<.>", 41),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijk", "<.>", 42),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijkl", "<.>", 43),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklm", "<.>", 44),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmn", "<.>", 45),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmno", "<.>", 46),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnop", "<.>", 47),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnopq", "<.>", 48),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnopqr", "<.>", 49),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnopqrs", "<.>", 50),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnopqrst", "<.>", 51),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnopqrstu", "<.>", 52),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnopqrstuv", "<.>", 53),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnopqrstuvw", "<.>", 54),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnopqrstuvwx", "<.>", 55),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnopqrstuvwxy", "<.>", 56),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnopqrstuvwxyz", "<.>", 57),
    ("A", "<:S>", 1),
    ("AB", "<:S>", 2),
    ("ABC", "<:S>", 3),
    ("ABCD", "<:S>", 4),
    ("ABCDE", "<:S>", 5),
    ("ABCDEF", "<:S>", 6),
    ("ABCDEFG", "<:S>", 7),
    ("ABCDEFGH", "<:S>", 8),
    ("ABCDEFGHI", "<:S>", 9),
    ("ABCDEFGHIJ", "<:S>", 10),
    ("ABCDEFGHIJK", "<:S>", 11),
    ("ABCDEFGHIJKL", "<:S>", 12),
    ("ABCDEFGHIJKLM", "<:S>", 13),
    ("ABCDEFGHIJKLMN", "<:S>", 14),
    ("ABCDEFGHIJKLMNO", "<:S>", 15),
    ("ABCDEFGHIJKLMNOP", "<:S>", 16),
    ("ABCDEFGHIJKLMNOPQ", "<:S>", 17),
    ("ABCDEFGHIJKLMNOPQR", "<:S>", 18),
    ("ABCDEFGHIJKLMNOPQRS", "<:S>", 19),
    ("ABCDEFGHIJKLMNOPQRST", "<:S>", 20),
    ("ABCDEFGHIJKLMNOPQRSTU", "<:S>", 21),
    ("ABCDEFGHIJKLMNOPQRSTUV", "<:S>", 22),
    ("ABCDEFGHIJKLMNOPQRSTUVW", "<:S>", 23),
    ("ABCDEFGHIJKLMNOPQRSTUVWX", "<:S>", 24),
    ("ABCDEFGHIJKLMNOPQRSTUVWXY", "<:S>", 25),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ", "<:S>", 26),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ[", "<:S>", 27),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ][", "<:S>", 28),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ^][", "<:S>", 29),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_^][", "<:S>", 30),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][", "<:S>", 31),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][a", "<:S>", 32),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][ab", "<:S>", 33),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abc", "<:S>", 34),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcd", "<:S>", 35),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcde", "<:S>", 36),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdef", "<:S>", 37),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefg", "<:S>", 38),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefgh", "<:S>", 39),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghi", "<:S>", 40),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghij", "<:S>", 41),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijk", "<:S>", 42),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijkl", "<:S>", 43),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklm", "<:S>", 44),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmn", "<:S>", 45),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmno", "<:S>", 46),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnop", "<:S>", 47),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnopq", "<:S>", 48),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnopqr", "<:S>", 49),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnopqrs", "<:S>", 50),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnopqrst", "<:S>", 51),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnopqrstu", "<:S>", 52),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnopqrstuv", "<:S>", 53),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnopqrstuvw", "<:S>", 54),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnopqrstuvwx", "<:S>", 55),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnopqrstuvwxy", "<:S>", 56),
    ("ABCDEFGHIJKLMNOPQRSTUVWXYZ_`^][abcdefghijklmnopqrstuvwxyz", "<:S>", 57),
    ("A", "#$<.{5}>", 0),
    ("AB", "#$<.{5}>", 0),
    ("ABC", "#$<.{5}>", 0),
    ("ABCD", "#$<.{5}>", 0),
    ("ABCDE", "#$<.{5}>", 1),
    ("ABCDEF", "#$<.{5}>", 1),
    ("ABCDEFG", "#$<.{5}>", 1),
    ("ABCDEFGH", "#$<.{5}>", 1),
    ("ABCDEFGHI", "#$<.{5}>", 1),
];
