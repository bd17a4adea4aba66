use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stylelens::loader::load_rules_from_str;
use stylelens::rules::{Checker, GrammarRule, PatternRule, RuleSet};
use stylelens::sentence::{TaggedSentence, TaggedWord};

const GRAMMAR: &str = r#"<rules>
  <rule id="THE_THE">
    <pattern lang="en">"the" "the"</pattern>
    <message>Double article.</message>
    <marker>1</marker>
    <error_rate>0</error_rate>
  </rule>
  <rule id="A_VOWEL">
    <pattern lang="en">"a" "[aeiou].*"</pattern>
    <message>Use 'an' before a vowel.</message>
    <marker>0</marker>
    <error_rate>0</error_rate>
  </rule>
  <rule id="DT_DT">
    <pattern>DT ^(NN|NNS|JJ)</pattern>
    <message>Determiner without a noun.</message>
    <marker>0</marker>
    <error_rate>0</error_rate>
  </rule>
  <rule id="SENT_START_AND">
    <pattern>SENT_START "and"</pattern>
    <message>Sentence starts with 'and'.</message>
    <marker>1</marker>
    <error_rate>0</error_rate>
  </rule>
</rules>"#;

const VOCABULARY: [(&str, &str); 8] = [
    ("the", "DT"),
    ("quick", "JJ"),
    ("fox", "NN"),
    ("jumps", "VBZ"),
    ("over", "IN"),
    ("a", "DT"),
    ("apple", "NN"),
    ("and", "CC"),
];

// Sentence of `words` taggable words separated by single spaces
fn create_sentence(words: usize) -> TaggedSentence {
    let mut entries = Vec::with_capacity(words * 2);
    for i in 0..words {
        if i > 0 {
            entries.push(TaggedWord::filler(" "));
        }
        let (form, tag) = VOCABULARY[i % VOCABULARY.len()];
        entries.push(TaggedWord::word(form, form, tag));
    }
    TaggedSentence::with_boundaries(entries)
}

fn create_checker() -> Checker {
    let rules = load_rules_from_str(GRAMMAR).unwrap();
    Checker::new(RuleSet::build(Some(20), None, rules))
}

fn bench_load_rules(c: &mut Criterion) {
    c.bench_function("load_rules", |b| {
        b.iter(|| {
            let rules = load_rules_from_str(black_box(GRAMMAR)).unwrap();
            black_box(rules);
        });
    });
}

fn bench_single_pattern_rule(c: &mut Criterion) {
    let rule = PatternRule::new("THE_THE", "\"the\" \"the\"", "Double article.", 1).unwrap();
    let sentence = create_sentence(40);

    c.bench_function("single_pattern_rule", |b| {
        b.iter(|| black_box(rule.matches(black_box(&sentence), 0)));
    });
}

fn bench_check_sentence(c: &mut Criterion) {
    let checker = create_checker();
    let mut group = c.benchmark_group("check_sentence");

    for words in [5, 25, 100] {
        let sentence = create_sentence(words);
        group.bench_with_input(BenchmarkId::from_parameter(words), &sentence, |b, s| {
            b.iter(|| black_box(checker.check_sentence(black_box(s), 0)));
        });
    }

    group.finish();
}

fn bench_check_text(c: &mut Criterion) {
    let checker = create_checker();
    let mut group = c.benchmark_group("check_text");
    group.sample_size(20);

    for sentences in [10, 100] {
        let text: Vec<TaggedSentence> = (0..sentences).map(|i| create_sentence(10 + i % 30)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(sentences), &text, |b, t| {
            b.iter(|| black_box(checker.check_text(black_box(t))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_load_rules,
    bench_single_pattern_rule,
    bench_check_sentence,
    bench_check_text
);
criterion_main!(benches);
