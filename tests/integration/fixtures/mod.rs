// Test fixtures with known documents and expected concordance reports
// WHY: Golden-file testing requires deterministic input/output pairs for validation

#![allow(dead_code)]

/// Two sentences sharing one word
pub const SIMPLE_TEXT: &str = "Hello world. Hello again.";

pub const SIMPLE_EXPECTED: &str = "a. again {1:2}
b. hello {2:1,2}
c. world {1:1}";

/// Classic concordance problem statement; 34 distinct tokens so serials wrap
pub const PROBLEM_TEXT: &str = "Given an arbitrary text document written in English, write a program that will generate a concordance, i.e. an alphabetical list of all word occurrences, labeled with word frequencies. Bonus: label each word with the sentence numbers in which each occurrence appeared.";

pub const PROBLEM_EXPECTED: &str = "a. a {2:1,1}
b. all {1:1}
c. alphabetical {1:1}
d. an {2:1,1}
e. appeared {1:2}
f. arbitrary {1:1}
g. bonus {1:2}
h. concordance {1:1}
i. document {1:1}
j. each {2:2,2}
k. english {1:1}
l. frequencies {1:1}
m. generate {1:1}
n. given {1:1}
o. i.e {1:1}
p. in {2:1,2}
q. label {1:2}
r. labeled {1:1}
s. list {1:1}
t. numbers {1:2}
u. occurrence {1:2}
v. occurrences {1:1}
w. of {1:1}
x. program {1:1}
y. sentence {1:2}
z. text {1:1}
aa. that {1:1}
bb. the {1:2}
cc. which {1:2}
dd. will {1:1}
ee. with {2:1,2}
ff. word {3:1,1,2}
gg. write {1:1}
hh. written {1:1}";

/// One sentence per line with title abbreviations and a quoted exclamation
pub const MULTILINE_TEXT: &str = "Dr. Watson arrived late.
He said \"Good evening!\" Mrs. Hudson nodded.
Watson sat down. He was tired.
";

pub const MULTILINE_EXPECTED: &str = "a. arrived {1:1}
b. down {1:4}
c. dr {1:1}
d. evening {1:2}
e. good {1:2}
f. he {2:2,5}
g. hudson {1:3}
h. late {1:1}
i. mrs {1:3}
j. nodded {1:3}
k. said {1:2}
l. sat {1:4}
m. tired {1:5}
n. was {1:5}
o. watson {2:1,4}";
